//! Backing data sources for order loading.
//!
//! The repository does not know where its bytes come from; a caller
//! hands it any [`OrderSource`].

use std::path::PathBuf;

use crate::error::OrderError;

/// Something that can produce the raw text of the order data source.
pub trait OrderSource {
    /// Human-readable name for logs and errors.
    fn describe(&self) -> String;

    /// Read the whole source.
    fn read_to_string(&self) -> Result<String, OrderError>;
}

/// A data source on the local filesystem.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OrderSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_to_string(&self) -> Result<String, OrderError> {
        std::fs::read_to_string(&self.path).map_err(|source| OrderError::Io {
            path: self.describe(),
            source,
        })
    }
}

/// A data source held in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    contents: String,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

impl OrderSource for InMemorySource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn read_to_string(&self) -> Result<String, OrderError> {
        Ok(self.contents.clone())
    }
}

impl<S: OrderSource + ?Sized> OrderSource for &S {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn read_to_string(&self) -> Result<String, OrderError> {
        (**self).read_to_string()
    }
}
