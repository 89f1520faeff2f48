//! A word index that normalizes raw input before handing it to a [`Tree`]. This is the glue an
//! interactive front end calls into. It does no I/O of its own.
//!
//! # Examples
//!
//! ```
//! use wordtree::{IndexError, WordIndex};
//!
//! let mut index = WordIndex::new();
//!
//! let insertion = index.insert("Maçã!").unwrap();
//! assert_eq!(insertion.key, "maca");
//! assert!(insertion.inserted);
//!
//! // Same canonical key, so it isn't added twice.
//! assert!(!index.insert("MACA").unwrap().inserted);
//! assert_eq!(index.insert("?!"), Err(IndexError::InvalidKey));
//!
//! assert!(index.contains("maçã"));
//! assert_eq!(index.len(), 1);
//! ```

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::config::IndexConfig;
use crate::error::Result;
use crate::normalize::normalize;
use crate::tree::Tree;

/// Outcome of [`WordIndex::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The canonical key the raw word normalized to.
    pub key: String,
    /// `false` if the key was already present.
    pub inserted: bool,
}

/// Outcome of [`WordIndex::timed_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedSearch {
    /// The canonical key that was looked up.
    pub key: String,
    /// Whether the key was found.
    pub found: bool,
    /// Wall time spent in the lookup alone, excluding normalization.
    pub elapsed: Duration,
}

/// Normalizing front for a [`Tree`] of words.
#[derive(Debug, Default)]
pub struct WordIndex {
    tree: Tree,
    config: IndexConfig,
}

impl WordIndex {
    /// An empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// An empty index with the given configuration.
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            tree: Tree::with_max_key_len(config.max_key_len),
            config,
        }
    }

    /// The configuration this index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// The underlying tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Normalizes `raw` and inserts it if it isn't present yet. Fails with
    /// [`InvalidKey`][crate::IndexError::InvalidKey] if nothing is left after normalization and
    /// with [`KeyTooLong`][crate::IndexError::KeyTooLong] if the key exceeds the configured
    /// maximum.
    pub fn insert(&mut self, raw: &str) -> Result<Insertion> {
        let key = normalize(raw);
        let inserted = self.tree.insert_unique(key.as_str())?;
        Ok(Insertion { key, inserted })
    }

    /// Returns `true` if `raw` normalizes to a stored key.
    pub fn contains(&self, raw: &str) -> bool {
        let key = normalize(raw);
        !key.is_empty() && self.tree.contains(&key)
    }

    /// Removes the word `raw` normalizes to. Returns `false` if it wasn't stored.
    pub fn remove(&mut self, raw: &str) -> bool {
        let key = normalize(raw);
        !key.is_empty() && self.tree.delete(&key)
    }

    /// Stored words containing the normalized `fragment`, in ascending order. A fragment that
    /// normalizes to nothing finds nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::WordIndex;
    ///
    /// let mut index = WordIndex::new();
    /// for word in ["Apple", "application", "banana"] {
    ///     index.insert(word).unwrap();
    /// }
    ///
    /// assert_eq!(index.search_fragment("APP"), ["apple", "application"]);
    /// assert!(index.search_fragment("--").is_empty());
    /// ```
    pub fn search_fragment(&self, fragment: &str) -> Vec<&str> {
        let fragment = normalize(fragment);
        if fragment.is_empty() {
            debug!("empty fragment, nothing to search for");
            return Vec::new();
        }
        self.tree.substring_scan(&fragment)
    }

    /// Every stored word in ascending order.
    pub fn words(&self) -> Vec<&str> {
        self.tree.in_order()
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.tree.count()
    }

    /// Returns `true` if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Removes every word.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Normalizes `raw` and times a single lookup of it. Only the lookup is measured.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::WordIndex;
    ///
    /// let mut index = WordIndex::new();
    /// index.insert("tree").unwrap();
    ///
    /// let search = index.timed_search("TREE");
    /// assert_eq!(search.key, "tree");
    /// assert!(search.found);
    /// println!("found in {:.6} seconds", search.elapsed.as_secs_f64());
    /// ```
    pub fn timed_search(&self, raw: &str) -> TimedSearch {
        let key = normalize(raw);
        let instant = Instant::now();
        let found = !key.is_empty() && self.tree.contains(&key);
        let elapsed = instant.elapsed();
        trace!("looked up {key:?} in {elapsed:?}, found: {found}");
        TimedSearch {
            key,
            found,
            elapsed,
        }
    }
}
