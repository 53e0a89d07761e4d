//! Standard output sink.

use std::io::Write;

use async_trait::async_trait;

use crate::error::SinkResult;
use crate::sink::traits::IdSink;

/// Prints each ID on its own line to stdout.
///
/// The stdout lock is held for the whole line, so concurrent producers may
/// interleave lines but never characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

#[async_trait]
impl IdSink for ConsoleSink {
    async fn emit(&self, id: String) -> SinkResult<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{id}")?;
        Ok(())
    }

    fn target(&self) -> &str {
        "stdout"
    }
}
