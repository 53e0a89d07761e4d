//! File sink with a single dedicated writer.
//!
//! Producers push lines into a bounded channel; one blocking task owns the
//! file and appends lines in arrival order. A full channel blocks producers.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::{SinkError, SinkResult};
use crate::sink::traits::IdSink;

/// Producer side of the file writer.
#[derive(Debug, Clone)]
pub struct FileSink {
    tx: mpsc::Sender<String>,
    target: String,
}

#[async_trait]
impl IdSink for FileSink {
    async fn emit(&self, id: String) -> SinkResult<()> {
        self.tx.send(id).await.map_err(|_| SinkError::WriterClosed)
    }

    fn target(&self) -> &str {
        &self.target
    }
}

/// Handle to the writer task.
#[derive(Debug)]
pub struct FileWriter {
    handle: JoinHandle<SinkResult<u64>>,
}

impl FileWriter {
    /// Wait for the writer to drain the channel and close the file.
    ///
    /// Every [`FileSink`] clone must be dropped first, otherwise this waits
    /// forever.
    ///
    /// # Errors
    ///
    /// Returns the I/O error that stopped the writer.
    pub async fn finish(self) -> SinkResult<u64> {
        self.handle
            .await
            .map_err(|e| SinkError::FileIO(format!("writer task failed: {e}")))?
    }
}

/// Start a writer for `path` with a queue of `capacity` lines.
///
/// Must be called within a Tokio runtime. The file is created or truncated
/// by the writer task, not by this call.
///
/// # Panics
///
/// Panics if `capacity` is zero.
#[must_use]
pub fn spawn_file_writer(path: PathBuf, capacity: usize) -> (FileSink, FileWriter) {
    let (tx, rx) = mpsc::channel(capacity);
    let target = path.display().to_string();
    let handle = tokio::task::spawn_blocking(move || write_lines(&path, rx));

    (FileSink { tx, target }, FileWriter { handle })
}

/// Writer loop: open, lock, truncate, then append until the channel closes.
fn write_lines(path: &Path, mut rx: mpsc::Receiver<String>) -> SinkResult<u64> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;

    file.try_lock_exclusive()
        .map_err(|e| SinkError::Locked(format!("{}: {e}", path.display())))?;
    file.set_len(0)?;

    let mut writer = BufWriter::new(&file);
    let mut written = 0u64;
    while let Some(line) = rx.blocking_recv() {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    drop(writer);
    file.sync_all()?;

    debug!(path = %path.display(), lines = written, "Output file closed");
    Ok(written)
}
