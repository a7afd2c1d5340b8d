//! File system sink

use super::DocumentSink;
use anyhow::Context;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Extension the documents are written with unless configured otherwise
pub const DEFAULT_EXTENSION: &str = "gv.txt";

/// File name stem used for documents without a name
const UNNAMED: &str = "graph";

/// Writes each document to `<directory>/<name>.<extension>`
#[derive(Debug, Clone)]
pub struct FileSink {
    directory: PathBuf,
    extension: String,
}

impl FileSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Path a document with this name is written to, always directly inside
    /// the sink's directory
    pub fn path_for(&self, name: &str) -> PathBuf {
        let stem = file_stem(name);
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            self.directory.join(stem)
        } else {
            self.directory.join(format!("{}.{}", stem, extension))
        }
    }

    /// Ensure output directory exists
    async fn ensure_directory(&self) -> anyhow::Result<()> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory)
                .await
                .with_context(|| format!("creating output directory {:?}", self.directory))?;
        }
        Ok(())
    }
}

/// File name stem for a document name: path separators become `_` and
/// leading dots are dropped, so the name can never leave the directory
fn file_stem(name: &str) -> String {
    let stem: String = name
        .trim_start_matches('.')
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '\0') { '_' } else { c })
        .collect();
    if stem.is_empty() {
        UNNAMED.to_string()
    } else {
        stem
    }
}

#[async_trait]
impl DocumentSink for FileSink {
    async fn persist(&self, name: &str, document: &str) -> anyhow::Result<()> {
        self.ensure_directory().await?;

        let path = self.path_for(name);
        fs::write(&path, document)
            .await
            .with_context(|| format!("writing graph document to {:?}", path))?;

        tracing::info!("Graph written to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        let sink = FileSink::new("/out");
        assert_eq!(sink.path_for("Outputs"), PathBuf::from("/out/Outputs.gv.txt"));
        assert_eq!(sink.path_for(""), PathBuf::from("/out/graph.gv.txt"));

        let sink = FileSink::new("/out").with_extension(".dot");
        assert_eq!(sink.path_for("Outputs"), PathBuf::from("/out/Outputs.dot"));
    }

    #[test]
    fn test_path_for_stays_in_directory() {
        let sink = FileSink::new("/out");
        assert_eq!(sink.path_for("Door/Lock"), PathBuf::from("/out/Door_Lock.gv.txt"));
        assert_eq!(sink.path_for("..\\up"), PathBuf::from("/out/_up.gv.txt"));
        assert_eq!(sink.path_for(".."), PathBuf::from("/out/graph.gv.txt"));
        assert_eq!(sink.path_for(".hidden"), PathBuf::from("/out/hidden.gv.txt"));
    }

    #[tokio::test]
    async fn test_persist_never_escapes_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        let sink = FileSink::new(&out);

        sink.persist("../escaped", "graph {}").await.unwrap();
        sink.persist("Door/Lock", "graph {}").await.unwrap();

        assert!(!dir.path().join("escaped.gv.txt").exists());
        assert!(out.join("_escaped.gv.txt").exists());
        assert!(out.join("Door_Lock.gv.txt").exists());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_persist_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path().join("nested").join("graphs"));

        sink.persist("Machine", "digraph Machine {\n}").await.unwrap();

        let written = std::fs::read_to_string(sink.path_for("Machine")).unwrap();
        assert_eq!(written, "digraph Machine {\n}");
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileSink::new(dir.path());

        sink.persist("Same", "first").await.unwrap();
        sink.persist("Same", "second").await.unwrap();

        let written = std::fs::read_to_string(sink.path_for("Same")).unwrap();
        assert_eq!(written, "second");
    }

    #[tokio::test]
    async fn test_persist_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let sink = FileSink::new(&blocker);
        assert!(sink.persist("Machine", "graph {}").await.is_err());
    }
}
