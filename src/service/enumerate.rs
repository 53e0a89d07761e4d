//! Enumeration driver.
//!
//! Materializes the counter sequence, composes each value into an ID and
//! delivers it to the configured sink. With one thread, output follows the
//! sequence order; with more, values are split across worker tasks and
//! output is completion order.

use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::domain::EnumerationRequest;
use crate::error::{AppError, Result};
use crate::service::composer::IdComposer;
use crate::sink::{IdSink, OutputTarget, open_sink};

/// Upper bound on producer tasks in parallel mode.
pub const MAX_WORKERS: usize = 1024;

/// How compositions are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One producer, input order.
    Sequential,
    /// Fixed pool of producers, completion order.
    Parallel {
        /// Number of producer tasks.
        workers: usize,
    },
}

impl ExecutionMode {
    /// Pick the mode for a thread count and number of values.
    ///
    /// The pool never exceeds the number of values or [`MAX_WORKERS`].
    #[must_use]
    pub fn for_threads(threads: i64, items: usize) -> Self {
        if threads <= 1 {
            return Self::Sequential;
        }
        let threads = usize::try_from(threads).unwrap_or(usize::MAX);
        Self::Parallel {
            workers: threads.min(items).clamp(1, MAX_WORKERS),
        }
    }
}

/// Options for an enumeration run.
#[derive(Debug, Clone)]
pub struct EnumerationOptions {
    /// Requested thread count; `<= 1` means sequential.
    pub threads: i64,
    /// Append the checksum suffix (18-char output).
    pub emit_suffix: bool,
    /// Result destination.
    pub target: OutputTarget,
    /// Bounded queue size between producers and the file writer.
    pub queue_capacity: usize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationSummary {
    /// IDs handed to the sink.
    pub emitted: u64,
    /// Scheduling used.
    pub mode: ExecutionMode,
}

/// Runs enumeration requests.
pub struct EnumerationDriver {
    options: EnumerationOptions,
}

impl EnumerationDriver {
    /// Create a new driver.
    #[must_use]
    pub const fn new(options: EnumerationOptions) -> Self {
        Self { options }
    }

    /// Generate, compose and deliver every ID for `request`.
    ///
    /// An empty sequence is rejected before any sink is opened, so no output
    /// file is created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::EmptySequence`] when no values are generated,
    /// [`AppError::WriteFailure`] when delivery fails (the writer's own
    /// error takes precedence over producer errors), and
    /// [`AppError::Internal`] if the runtime cannot start.
    pub fn run(&self, request: &EnumerationRequest) -> Result<EnumerationSummary> {
        let values: Vec<i64> = request.values().collect();
        if values.is_empty() {
            return Err(AppError::EmptySequence);
        }

        let mode = ExecutionMode::for_threads(self.options.threads, values.len());
        let composer = IdComposer::new(request.prefix.clone(), self.options.emit_suffix);
        debug!(count = values.len(), ?mode, "Starting enumeration");

        let runtime = build_runtime(mode)?;
        let summary = runtime.block_on(async {
            let handle = open_sink(&self.options.target, self.options.queue_capacity);
            let target = handle.target().to_string();
            let produced = drive(mode, &composer, values, handle.sink()).await;
            let closed = handle.close().await;

            match (produced, closed) {
                (_, Err(source)) => Err(AppError::WriteFailure { target, source }),
                (Err(err), Ok(_)) => Err(err),
                (Ok(emitted), Ok(_)) => Ok(EnumerationSummary { emitted, mode }),
            }
        })?;

        info!(emitted = summary.emitted, mode = ?summary.mode, "Enumeration complete");
        Ok(summary)
    }
}

/// OS threads backing `workers` producer tasks, capped at the available
/// parallelism.
fn runtime_threads(workers: usize) -> usize {
    let available = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    workers.clamp(1, available)
}

/// Build the runtime backing a run.
fn build_runtime(mode: ExecutionMode) -> Result<Runtime> {
    let mut builder = match mode {
        ExecutionMode::Sequential => Builder::new_current_thread(),
        ExecutionMode::Parallel { workers } => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(runtime_threads(workers));
            builder
        }
    };
    builder
        .thread_name("sfidenum-worker")
        .build()
        .map_err(|e| AppError::Internal(format!("failed to start runtime: {e}")))
}

/// Compose every value and emit it to `sink`.
///
/// In parallel mode each worker takes every `workers`-th value. The first
/// producer error is returned once all workers have stopped.
///
/// # Errors
///
/// Returns [`AppError::WriteFailure`] if the sink rejects an ID and
/// [`AppError::Internal`] if a worker panics.
pub async fn drive(
    mode: ExecutionMode,
    composer: &IdComposer,
    values: Vec<i64>,
    sink: Arc<dyn IdSink>,
) -> Result<u64> {
    match mode {
        ExecutionMode::Sequential => produce(composer, values.into_iter(), sink.as_ref()).await,
        ExecutionMode::Parallel { workers } => {
            let values: Arc<[i64]> = values.into();
            let mut set = JoinSet::new();
            for worker in 0..workers {
                let values = Arc::clone(&values);
                let composer = composer.clone();
                let sink = Arc::clone(&sink);
                set.spawn(async move {
                    let share = values.iter().copied().skip(worker).step_by(workers);
                    produce(&composer, share, sink.as_ref()).await
                });
            }
            drop(sink);

            let mut emitted = 0;
            let mut first_error = None;
            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok(Ok(count)) => emitted += count,
                    Ok(Err(err)) => {
                        first_error.get_or_insert(err);
                    }
                    Err(err) => {
                        first_error.get_or_insert(AppError::Internal(format!(
                            "worker task failed: {err}"
                        )));
                    }
                }
            }
            first_error.map_or(Ok(emitted), Err)
        }
    }
}

/// Single producer loop; stops at the first rejected ID.
async fn produce(
    composer: &IdComposer,
    values: impl Iterator<Item = i64>,
    sink: &dyn IdSink,
) -> Result<u64> {
    let mut emitted = 0;
    for value in values {
        sink.emit(composer.compose(value).id)
            .await
            .map_err(|source| AppError::WriteFailure {
                target: sink.target().to_string(),
                source,
            })?;
        emitted += 1;
    }
    Ok(emitted)
}
