/// The longest canonical key accepted by default, in bytes.
pub const DEFAULT_MAX_KEY_LEN: usize = 99;

/// Configuration for a [`WordIndex`][crate::WordIndex].
///
/// # Examples
///
/// ```
/// use wordtree::IndexConfig;
///
/// let config = IndexConfig::builder().max_key_len(32).build();
/// assert_eq!(config.max_key_len, 32);
///
/// assert_eq!(IndexConfig::default().max_key_len, wordtree::DEFAULT_MAX_KEY_LEN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexConfig {
    /// Longest canonical key, in bytes, that can be inserted. Never zero.
    pub max_key_len: usize,
}

impl IndexConfig {
    /// The default configuration.
    pub fn new() -> Self {
        Self {
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }

    /// Starts building a configuration from the defaults.
    pub fn builder() -> IndexConfigBuilder {
        IndexConfigBuilder::default()
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`IndexConfig`].
#[derive(Debug, Default)]
pub struct IndexConfigBuilder {
    max_key_len: Option<usize>,
}

impl IndexConfigBuilder {
    /// Sets the longest accepted key. Zero is raised to one.
    pub fn max_key_len(mut self, max_key_len: usize) -> Self {
        self.max_key_len = Some(max_key_len);
        self
    }

    /// Finishes the configuration.
    pub fn build(self) -> IndexConfig {
        IndexConfig {
            max_key_len: self.max_key_len.unwrap_or(DEFAULT_MAX_KEY_LEN).max(1),
        }
    }
}
