//! Read-only label lookup shared by every renderer.
//!
//! The table is loaded once before any rendering and only ever borrowed
//! afterwards.

use crate::utils::error::LoadError;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

/// Translation table: key -> display label
#[derive(Debug, Clone, Default)]
pub struct Translations {
    labels: HashMap<String, String>,
}

impl Translations {
    /// Load a flat `key = "label"` TOML table
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Loading translations from: {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let labels: HashMap<String, String> =
            toml::from_str(&raw).map_err(|source| LoadError::Toml {
                path: path.to_path_buf(),
                source,
            })?;

        debug!("Loaded {} translations", labels.len());
        Ok(Self { labels })
    }

    /// Build a table from in-memory pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            labels: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a label, falling back to the key itself
    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        match self.labels.get(key) {
            Some(label) => label,
            None => {
                warn!("Missing translation for '{}'", key);
                key
            }
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
