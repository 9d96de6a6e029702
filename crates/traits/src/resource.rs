//! Asset lookup for the quote renderer.
//!
//! The renderer only ever asks two questions of an asset store: "is there an
//! image at this path" and "give me its bytes". Keeping that behind a trait
//! lets the CLI read from disk while tests hand over bytes directly.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Reference-counted asset bytes.
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of binary assets (the quote logo) addressed by relative path.
pub trait ResourceProvider: Send + Sync + Debug {
    /// Loads the asset stored under `path`.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Returns `true` if `load` would find something at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Directory that relative paths are resolved against, if any.
    fn base_path(&self) -> Option<&str> {
        None
    }

    fn name(&self) -> &'static str;
}

/// Asset store backed by a map, populated up front.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    assets: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`InMemoryResourceProvider::add`].
    pub fn with_asset(self, path: impl Into<String>, data: Vec<u8>) -> Result<Self, ResourceError> {
        self.add(path, data)?;
        Ok(self)
    }

    /// Stores `data` under `path`, replacing anything already there.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path = path.into();
        let mut assets = self.assets.write().map_err(|_| ResourceError::LoadFailed {
            path: path.clone(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets.insert(path, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.assets.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let assets = self.assets.read().map_err(|_| ResourceError::LoadFailed {
            path: path.to_string(),
            message: "asset store lock poisoned".to_string(),
        })?;
        assets
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.assets
            .read()
            .map(|a| a.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
