//! This crate is a small in-memory word index built on an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored records. BSTs are typically defined recursively using the notion of a `Node`. Here a
//! `Node` stores a single word and has up to two child `Node`s. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less than its own
//!    key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key greater than its
//!    own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is the longest path from the root `Node` to a
//! leaf `Node`). This tree does not balance itself, so inserting words in sorted order gives a
//! tree whose height equals its size. Visiting the left subtree, then the subtree root, then the
//! right subtree yields the words in sorted order.
//!
//! ## Words
//!
//! Words are reduced to canonical keys by [`normalize::normalize`] before they are stored, and
//! [`WordIndex`] does that on every call so callers can pass raw user input.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod config;
mod error;
mod index;
pub mod normalize;
pub mod tree;

pub use config::{IndexConfig, IndexConfigBuilder, DEFAULT_MAX_KEY_LEN};
pub use error::{IndexError, Result};
pub use index::{Insertion, TimedSearch, WordIndex};
pub use normalize::normalize;
pub use tree::Tree;
