//! Word catalog loading.
//!
//! A catalog is a JSON document listing topics in display order:
//!
//! ```json
//! {
//!   "topics": [
//!     { "id": "food", "title": "Comida y bebida", "words": ["pan", "queso"] }
//!   ]
//! }
//! ```
//!
//! Loading checks only what lookups depend on: ids are unique, titles are
//! non-empty, and at least one topic exists. Word lists are taken as given.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::bank::WordBank;
use super::topic::Topic;
use crate::error::CatalogError;

/// The Spanish catalog shipped with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../../data/es.json");

/// One topic entry as it appears in a catalog file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Top-level catalog document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub topics: Vec<TopicEntry>,
}

impl Catalog {
    /// Parse a catalog document without validating it.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and convert into a `WordBank`.
    pub fn into_bank(self) -> Result<WordBank, CatalogError> {
        if self.topics.is_empty() {
            return Err(CatalogError::NoTopics);
        }

        let mut bank = WordBank::new();
        for entry in self.topics {
            if entry.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(entry.id));
            }
            if bank.contains_topic(&entry.id) {
                return Err(CatalogError::DuplicateTopic(entry.id));
            }
            debug!(topic = %entry.id, words = entry.words.len(), "Registered topic");
            bank.insert(Topic::new(entry.id, entry.title), entry.words);
        }

        info!(topics = bank.len(), "Loaded word catalog");
        Ok(bank)
    }
}

impl WordBank {
    /// Load a bank from a JSON catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Catalog::parse(json)?.into_bank()
    }

    /// Load a bank from a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load the catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }
}
