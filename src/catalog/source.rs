use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::entity::PromptRecord;
use crate::error::{GalleryError, Result};

/// Where the catalog JSON comes from. One call per page load.
pub trait DataSource {
    /// Human-readable origin, used in error messages.
    fn name(&self) -> String;

    fn fetch(&self) -> Result<Vec<PromptRecord>>;
}

/// Catalog stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

}

impl DataSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Vec<PromptRecord>> {
        let text = fs::read_to_string(&self.path).map_err(|e| GalleryError::Source {
            source_name: self.name(),
            message: e.to_string(),
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "read catalog file");
        parse_catalog(&self.name(), &text)
    }
}

/// Catalog held in memory, mostly for tests and embedding.
#[derive(Debug, Clone)]
pub struct JsonSource {
    document: String,
}

impl JsonSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl DataSource for JsonSource {
    fn name(&self) -> String {
        "inline JSON".to_string()
    }

    fn fetch(&self) -> Result<Vec<PromptRecord>> {
        parse_catalog(&self.name(), &self.document)
    }
}

/// Records that were already fetched, e.g. to report a load error before
/// anything is drawn.
#[derive(Debug, Clone)]
pub struct Prefetched {
    name: String,
    records: Vec<PromptRecord>,
}

impl Prefetched {
    pub fn new(name: impl Into<String>, records: Vec<PromptRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

impl DataSource for Prefetched {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<Vec<PromptRecord>> {
        Ok(self.records.clone())
    }
}

fn parse_catalog(name: &str, text: &str) -> Result<Vec<PromptRecord>> {
    serde_json::from_str(text).map_err(|e| GalleryError::Source {
        source_name: name.to_string(),
        message: e.to_string(),
    })
}
