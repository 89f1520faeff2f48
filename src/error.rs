/// Reasons a key can be refused by [`Tree::insert_unique`][crate::Tree::insert_unique].
///
/// Duplicates and misses are not errors. Those are reported through the boolean results of the
/// tree operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The canonical key was empty, usually because normalization stripped everything.
    #[error("invalid key: a key must contain at least one letter or digit")]
    InvalidKey,
    /// The canonical key is longer than the tree accepts.
    #[error("key is {len} bytes long but at most {max} bytes are allowed")]
    KeyTooLong {
        /// Length of the rejected key in bytes.
        len: usize,
        /// Configured maximum in bytes.
        max: usize,
    },
}

/// Shorthand for results carrying an [`IndexError`].
pub type Result<T> = std::result::Result<T, IndexError>;
