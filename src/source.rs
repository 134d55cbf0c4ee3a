//! Project Data Source
//!
//! Location of the `projects.json` document. Every call re-reads the file:
//! pages always reflect the document as it is on disk at request time.

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::models::ProjectCatalog;

/// Default path, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/projects.json";

#[derive(Debug, Clone)]
pub struct CatalogSource {
    path: PathBuf,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document as-is
    pub async fn load_raw(&self) -> Result<String, LoadError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }

    /// Read and parse the document
    pub async fn load(&self) -> Result<ProjectCatalog, LoadError> {
        let start = std::time::Instant::now();

        let raw = self.load_raw().await?;
        let catalog = ProjectCatalog::from_json(&raw)?;

        let duplicates = catalog.duplicate_ids();
        if !duplicates.is_empty() {
            tracing::warn!(
                "Duplicate project ids in {} (first entry wins): {:?}",
                self.path.display(),
                duplicates
            );
        }

        tracing::debug!(
            "Loaded {} projects from {} in {:?}",
            catalog.len(),
            self.path.display(),
            start.elapsed()
        );

        Ok(catalog)
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_reads_fresh_each_time() {
        let file = write_temp(r#"{ "projects": [] }"#);
        let source = CatalogSource::new(file.path());

        assert!(source.load().await.unwrap().is_empty());

        let updated = r#"{ "projects": [ {
            "id": "a", "title": "A", "description": "d", "image": "a.png",
            "tags": [], "readTime": "1 min read", "sections": []
        } ] }"#;
        std::fs::write(file.path(), updated).unwrap();

        assert_eq!(source.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CatalogSource::new(dir.path().join("missing.json"));

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let file = write_temp("not json");
        let source = CatalogSource::new(file.path());

        assert!(matches!(source.load().await.unwrap_err(), LoadError::Parse(_)));
        // Raw passthrough does not validate
        assert_eq!(source.load_raw().await.unwrap(), "not json");
    }
}
