//! Word bank: topics, catalogs, and secret word selection.
//!
//! ## Key Types
//!
//! - `Topic`: id + display title
//! - `WordBank`: topic → words, random selection with exclusion
//! - `Catalog`: JSON document a bank is loaded from

pub mod bank;
pub mod catalog;
pub mod topic;

pub use bank::WordBank;
pub use catalog::{Catalog, TopicEntry, BUNDLED_CATALOG};
pub use topic::Topic;
