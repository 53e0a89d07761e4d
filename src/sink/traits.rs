//! Sink trait definitions.
//!
//! Producers hand every composed ID to an [`IdSink`]. Implementations must
//! never interleave two IDs within one line.

use async_trait::async_trait;

use crate::error::SinkResult;

/// Destination for generated IDs.
#[async_trait]
pub trait IdSink: Send + Sync {
    /// Deliver one ID as a single line.
    async fn emit(&self, id: String) -> SinkResult<()>;

    /// Human-readable name of the destination, used in error messages.
    fn target(&self) -> &str;
}
