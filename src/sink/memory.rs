//! In-memory sink

use super::DocumentSink;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Keeps persisted documents in memory, keyed by name
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<HashMap<String, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a stored document by name
    pub async fn get(&self, name: &str) -> Option<String> {
        self.documents.lock().await.get(name).cloned()
    }

    /// Number of stored documents
    pub async fn len(&self) -> usize {
        self.documents.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.lock().await.is_empty()
    }
}

#[async_trait]
impl DocumentSink for MemorySink {
    async fn persist(&self, name: &str, document: &str) -> anyhow::Result<()> {
        self.documents
            .lock()
            .await
            .insert(name.to_string(), document.to_string());
        Ok(())
    }
}
