//! Sink module - Persistence for rendered graph documents
//!
//! The emitter hands each finished document to a [`DocumentSink`] together
//! with its name. Where and how the text ends up is up to the sink:
//! - `FileSink`: writes `<directory>/<name>.<extension>`
//! - `MemorySink`: keeps documents in memory, keyed by name
//! - `StdoutSink`: prints documents to standard output

use async_trait::async_trait;

pub mod file;
pub mod memory;
pub mod stdout;

pub use file::FileSink;
pub use memory::MemorySink;
pub use stdout::StdoutSink;

/// Destination for rendered graph documents
///
/// Errors are sink-specific; the emitter logs them and reports a generic
/// persistence failure to its caller.
#[async_trait]
pub trait DocumentSink: Send + Sync {
    /// Durably store `document` under `name`
    async fn persist(&self, name: &str, document: &str) -> anyhow::Result<()>;
}

#[async_trait]
impl<S: DocumentSink + ?Sized> DocumentSink for Box<S> {
    async fn persist(&self, name: &str, document: &str) -> anyhow::Result<()> {
        (**self).persist(name, document).await
    }
}

#[async_trait]
impl<S: DocumentSink + ?Sized> DocumentSink for std::sync::Arc<S> {
    async fn persist(&self, name: &str, document: &str) -> anyhow::Result<()> {
        (**self).persist(name, document).await
    }
}
