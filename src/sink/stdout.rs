//! Standard output sink

use super::DocumentSink;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

/// Prints each document to standard output, followed by a newline
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[async_trait]
impl DocumentSink for StdoutSink {
    async fn persist(&self, name: &str, document: &str) -> anyhow::Result<()> {
        tracing::debug!("Writing graph {:?} to stdout", name);
        let mut stdout = tokio::io::stdout();
        stdout.write_all(document.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}
