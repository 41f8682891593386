//! Blueprint source backends.
//!
//! A [`BlueprintSource`] hands the store raw schema text for a content
//! type. The directory backend keeps one `<type_id>.yaml` per content
//! type; the memory backend serves embedded or test fixtures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{BlueprintError, Result};

/// Trait for backends that can produce raw blueprint text by content type.
pub trait BlueprintSource: Send + Sync {
    /// Raw schema text for `type_id`, or [`BlueprintError::NotFound`].
    fn load(&self, type_id: &str) -> Result<String>;
}

/// Blueprint source reading one `<type_id>.yaml` file per content type
/// from a root directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source over `root`. The directory is not required to exist
    /// until a blueprint is requested.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blueprint_path(&self, type_id: &str) -> PathBuf {
        self.root.join(format!("{type_id}.yaml"))
    }
}

impl BlueprintSource for DirectorySource {
    fn load(&self, type_id: &str) -> Result<String> {
        let path = self.blueprint_path(type_id);
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(BlueprintError::NotFound {
                    type_id: type_id.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory blueprint source.
///
/// Holds raw schema text keyed by content type. Used for embedded schemas
/// and throughout the test suite.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    blueprints: HashMap<String, String>,
}

impl MemorySource {
    /// Create an empty memory source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add raw schema text for `type_id`, replacing any existing entry.
    pub fn insert(mut self, type_id: impl Into<String>, raw: impl Into<String>) -> Self {
        self.blueprints.insert(type_id.into(), raw.into());
        self
    }
}

impl BlueprintSource for MemorySource {
    fn load(&self, type_id: &str) -> Result<String> {
        self.blueprints
            .get(type_id)
            .cloned()
            .ok_or_else(|| BlueprintError::NotFound {
                type_id: type_id.to_string(),
            })
    }
}
