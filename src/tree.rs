//! An unbalanced BST of canonical words. Each parent exclusively owns its children through
//! `Option<Box<Node>>` links, so dropping a link releases the whole subtree.
//!
//! There is no self-balancing. Feeding sorted input degrades the tree into a linked list and
//! every operation becomes `O(n)`. Traversal and teardown use explicit stacks so that a
//! degenerate tree is slow but never overflows the call stack.
//!
//! # Examples
//!
//! ```
//! use wordtree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains("banana"));
//!
//! assert_eq!(tree.insert_unique("banana"), Ok(true));
//! assert_eq!(tree.insert_unique("apple"), Ok(true));
//! assert_eq!(tree.insert_unique("cherry"), Ok(true));
//!
//! // Inserting an existing key is refused but isn't an error.
//! assert_eq!(tree.insert_unique("apple"), Ok(false));
//! assert_eq!(tree.count(), 3);
//!
//! assert_eq!(tree.in_order(), ["apple", "banana", "cherry"]);
//!
//! assert!(tree.delete("banana"));
//! assert!(!tree.contains("banana"));
//! assert_eq!(tree.in_order(), ["apple", "cherry"]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::config::DEFAULT_MAX_KEY_LEN;
use crate::error::{IndexError, Result};

type Link = Option<Box<Node>>;

struct Node {
    key: String,
    left: Link,
    right: Link,
}

impl Node {
    fn new_boxed(key: String) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree holding unique, non-empty string keys in byte order.
pub struct Tree {
    root: Link,
    max_key_len: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Tree {
    /// Generates a new, empty `Tree` accepting keys up to [`DEFAULT_MAX_KEY_LEN`] bytes.
    pub fn new() -> Self {
        Self::with_max_key_len(DEFAULT_MAX_KEY_LEN)
    }

    /// Generates a new, empty `Tree` accepting keys up to `max_key_len` bytes. A maximum of zero
    /// is raised to one.
    pub fn with_max_key_len(max_key_len: usize) -> Self {
        Self {
            root: None,
            max_key_len: max_key_len.max(1),
        }
    }

    /// The longest key, in bytes, that [`insert_unique`][Self::insert_unique] accepts.
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key` as a new leaf unless it is already present.
    ///
    /// Returns `Ok(true)` if the key was added and `Ok(false)` if an equal key was already in the
    /// tree. Empty keys and keys longer than [`max_key_len`][Self::max_key_len] are rejected.
    /// Nothing is mutated unless `Ok(true)` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::{IndexError, Tree};
    ///
    /// let mut tree = Tree::with_max_key_len(5);
    ///
    /// assert_eq!(tree.insert_unique("apple"), Ok(true));
    /// assert_eq!(tree.insert_unique("apple"), Ok(false));
    /// assert_eq!(tree.insert_unique(""), Err(IndexError::InvalidKey));
    /// assert_eq!(
    ///     tree.insert_unique("bananas"),
    ///     Err(IndexError::KeyTooLong { len: 7, max: 5 })
    /// );
    /// assert_eq!(tree.count(), 1);
    /// ```
    pub fn insert_unique(&mut self, key: impl Into<String>) -> Result<bool> {
        let key = key.into();
        if key.is_empty() {
            debug!("rejected empty key");
            return Err(IndexError::InvalidKey);
        }
        if key.len() > self.max_key_len {
            debug!("rejected key of {} bytes", key.len());
            return Err(IndexError::KeyTooLong {
                len: key.len(),
                max: self.max_key_len,
            });
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match key.as_str().cmp(node.key.as_str()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Equal => {
                    debug!("{key:?} is already present");
                    return Ok(false);
                }
                Ordering::Greater => slot = &mut node.right,
            }
        }
        debug!("inserted {key:?}");
        *slot = Some(Node::new_boxed(key));
        Ok(true)
    }

    /// Returns `true` if a node holds exactly `key`. Walks a single root-to-leaf path so this is
    /// `O(height)`.
    pub fn contains(&self, key: &str) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            match key.cmp(node.key.as_str()) {
                Ordering::Less => link = &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => link = &node.right,
            }
        }
        false
    }

    /// Removes the node holding `key`. Returns `true` if a node was removed and `false` if the
    /// key wasn't present, in which case nothing happens.
    ///
    /// A node with two children takes over the key of its in-order successor (the leftmost node
    /// of its right subtree) and the successor node is unlinked instead.
    ///
    /// Recurses once per level, so the stack cost is `O(height)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in ["d", "b", "f", "a", "c", "e"] {
    ///     tree.insert_unique(key).unwrap();
    /// }
    ///
    /// assert!(tree.delete("d"));
    /// assert!(!tree.delete("d"));
    /// assert_eq!(tree.in_order(), ["a", "b", "c", "e", "f"]);
    /// ```
    pub fn delete(&mut self, key: &str) -> bool {
        let deleted = delete_from(&mut self.root, key);
        if deleted {
            debug!("deleted {key:?}");
        }
        deleted
    }

    /// Counts the nodes as `1 + count(left) + count(right)`. This is `O(n)` time and, being
    /// recursive, `O(height)` stack.
    pub fn count(&self) -> usize {
        count_nodes(&self.root)
    }

    /// The number of nodes on the longest root-to-leaf path. An empty tree has a height of 0 and
    /// a degenerate tree has a height equal to its count.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node, usize)> = self.root.iter().map(|n| (&**n, 1)).collect();
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.iter().map(|n| (&**n, depth + 1)));
            stack.extend(node.right.iter().map(|n| (&**n, depth + 1)));
        }
        height
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Collects every key in ascending order. Calling this again on an unchanged tree yields the
    /// same sequence.
    pub fn in_order(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Collects, in ascending order, the keys that contain `fragment` as a contiguous substring.
    /// The check is an exact, case-sensitive byte match. An empty fragment matches every key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in ["banana", "application", "apple"] {
    ///     tree.insert_unique(key).unwrap();
    /// }
    ///
    /// assert_eq!(tree.substring_scan("app"), ["apple", "application"]);
    /// assert_eq!(tree.substring_scan("an"), ["banana"]);
    /// assert!(tree.substring_scan("kiwi").is_empty());
    /// ```
    pub fn substring_scan(&self, fragment: &str) -> Vec<&str> {
        self.iter().filter(|key| key.contains(fragment)).collect()
    }

    /// Releases every node and leaves the tree empty. Each node's children are detached before
    /// the node itself is freed, so no recursion happens however deep the tree is. Calling this
    /// on an empty tree does nothing.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        let mut released = 0usize;
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
            released += 1;
        }
        if released > 0 {
            trace!("released {released} nodes");
        }
    }
}

fn delete_from(slot: &mut Link, key: &str) -> bool {
    let Some(node) = slot else {
        return false;
    };
    match key.cmp(node.key.as_str()) {
        Ordering::Less => delete_from(&mut node.left, key),
        Ordering::Greater => delete_from(&mut node.right, key),
        Ordering::Equal => {
            if node.left.is_some() && node.right.is_some() {
                if let Some(successor) = take_leftmost(&mut node.right) {
                    node.key = successor;
                }
            } else {
                let child = node.left.take().or_else(|| node.right.take());
                *slot = child;
            }
            true
        }
    }
}

/// Unlinks the leftmost node of the subtree at `slot`, putting its right child (it can't have a
/// left one) in its place, and returns its key.
fn take_leftmost(slot: &mut Link) -> Option<String> {
    let node = slot.as_mut()?;
    if node.left.is_some() {
        return take_leftmost(&mut node.left);
    }
    let mut leftmost = slot.take()?;
    *slot = leftmost.right.take();
    Some(leftmost.key)
}

fn count_nodes(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count_nodes(&node.left) + count_nodes(&node.right),
    }
}

/// In-order iterator over the keys of a [`Tree`], returned by [`Tree::iter`]. Holds at most
/// `height` node references.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.key.as_str())
    }
}
