//! B-tree index implementation.
//!
//! An in-memory, page-based balanced search tree of configurable order.
//!
//! # Components
//! - [`BTree`] - The public handle: insert, find, in-order traversal
//! - [`Page`] / [`PageStore`] - Tree nodes and the arena that owns them
//! - [`Items`] - Ordered container backing a page's entries and children
//! - Invariant checker - `BTree::check_invariants` / `BTree::assert_invariants`
//! - [`TreeStats`] - Shape statistics
//! - [`SharedTree`] - Lock-protected handle for sharing a tree across threads

mod invariant;
mod items;
mod page;
mod shared;
mod stats;
mod tree;

pub use items::Items;
pub use page::{Entry, Lookup, Page, PageStore};
pub use shared::SharedTree;
pub use stats::TreeStats;
pub use tree::BTree;
