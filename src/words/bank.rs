//! Topic-scoped word storage and selection.
//!
//! The `WordBank` is built once per session (see `catalog`) and is read-only
//! afterwards. Selection never mutates the bank; the caller keeps track of
//! the last dealt word and passes it back as `exclude`.

use rustc_hash::FxHashMap;

use super::topic::Topic;
use crate::core::GameRng;

/// Words grouped by topic.
///
/// ## Example
///
/// ```
/// use impostor_game::core::GameRng;
/// use impostor_game::words::{Topic, WordBank};
///
/// let mut bank = WordBank::new();
/// bank.insert(Topic::new("food", "Food"), vec!["pan".into(), "queso".into()]);
///
/// let mut rng = GameRng::new(1);
/// assert_eq!(bank.select_word("food", Some("pan"), &mut rng), "queso");
/// assert_eq!(bank.select_word("nope", None, &mut rng), "");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    topics: Vec<Topic>,
    words: FxHashMap<String, Vec<String>>,
}

impl WordBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topic, or replace the title and words of an existing one.
    ///
    /// New topics are listed after the ones already present.
    pub fn insert(&mut self, topic: Topic, words: Vec<String>) {
        match self.topics.iter_mut().find(|t| t.id == topic.id) {
            Some(existing) => existing.title = topic.title,
            None => self.topics.push(topic.clone()),
        }
        self.words.insert(topic.id, words);
    }

    /// All topics in catalog order.
    #[must_use]
    pub fn list_topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Look up a topic by id.
    #[must_use]
    pub fn topic(&self, topic_id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id == topic_id)
    }

    /// Check if a topic id is present.
    #[must_use]
    pub fn contains_topic(&self, topic_id: &str) -> bool {
        self.words.contains_key(topic_id)
    }

    /// Words for a topic. Unknown ids yield an empty slice.
    #[must_use]
    pub fn words_for_topic(&self, topic_id: &str) -> &[String] {
        self.words.get(topic_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Pick a word from a topic uniformly at random.
    ///
    /// When `exclude` is given and the topic has more than one word, the
    /// excluded word is never returned. A single-word topic returns its word
    /// regardless. Unknown or empty topics return `""`.
    pub fn select_word<'a>(
        &'a self,
        topic_id: &str,
        exclude: Option<&str>,
        rng: &mut GameRng,
    ) -> &'a str {
        let words = self.words_for_topic(topic_id);

        let pool: Vec<&'a str> = match exclude {
            Some(excluded) if words.len() > 1 => words
                .iter()
                .map(String::as_str)
                .filter(|w| *w != excluded)
                .collect(),
            _ => words.iter().map(String::as_str).collect(),
        };

        // Every entry equals the excluded word: nothing else to offer.
        if pool.is_empty() {
            return words.first().map(String::as_str).unwrap_or("");
        }

        rng.choose(&pool).copied().unwrap_or("")
    }

    /// Number of topics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Check if the bank has no topics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
