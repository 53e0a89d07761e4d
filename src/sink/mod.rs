//! Output sink module.
//!
//! Generated IDs go either to stdout or, through one serialized writer, to
//! a file. See [`open_sink`] for creating the configured sink.

pub mod console;
pub mod file;
pub mod traits;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, TimeZone};

use crate::error::SinkResult;

pub use console::ConsoleSink;
pub use file::{FileSink, FileWriter, spawn_file_writer};
pub use traits::IdSink;

/// Fallback stem for the default output file.
pub const DEFAULT_FILE_STEM: &str = "sfidenum";

/// Where enumeration results are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One ID per line on stdout.
    Console,
    /// One ID per line in a freshly truncated file.
    File(PathBuf),
}

/// An open sink plus the writer that must be joined when producers finish.
pub struct SinkHandle {
    sink: Arc<dyn IdSink>,
    writer: Option<FileWriter>,
}

impl SinkHandle {
    /// Shared producer handle.
    #[must_use]
    pub fn sink(&self) -> Arc<dyn IdSink> {
        Arc::clone(&self.sink)
    }

    /// Destination name for diagnostics.
    #[must_use]
    pub fn target(&self) -> &str {
        self.sink.target()
    }

    /// Drop the producer handle and wait for the writer, if any.
    ///
    /// Returns the number of lines the writer persisted.
    ///
    /// # Errors
    ///
    /// Returns the writer's I/O error.
    pub async fn close(self) -> SinkResult<Option<u64>> {
        drop(self.sink);
        match self.writer {
            Some(writer) => writer.finish().await.map(Some),
            None => Ok(None),
        }
    }
}

/// Create a sink for the given target.
///
/// File targets spawn their writer task, so this must run inside a Tokio
/// runtime.
#[must_use]
pub fn open_sink(target: &OutputTarget, queue_capacity: usize) -> SinkHandle {
    match target {
        OutputTarget::Console => SinkHandle {
            sink: Arc::new(ConsoleSink),
            writer: None,
        },
        OutputTarget::File(path) => {
            let (sink, writer) = spawn_file_writer(path.clone(), queue_capacity);
            SinkHandle {
                sink: Arc::new(sink),
                writer: Some(writer),
            }
        }
    }
}

/// Default output path: `<program stem>-<timestamp>.txt`.
#[must_use]
pub fn default_output_path<Tz>(program: &str, timestamp_format: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let stem = Path::new(program)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_FILE_STEM);
    PathBuf::from(format!("{stem}-{}.txt", now.format(timestamp_format)))
}
