//! pagetree - an in-memory, page-based B-tree with a structural invariant checker.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagetree                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        SharedTree (index/btree)  [optional wrapper]      │   │
//! │  │      Arc<RwLock<BTree>>: one writer, many readers        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 BTree (index/btree)                      │   │
//! │  │   insert → find → split / promote   |  for_each          │   │
//! │  │   check_invariants / assert_invariants  |  stats         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             PageStore + Page + Items                     │   │
//! │  │   arena of pages; parent/child links are PageIds         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 common/                                  │   │
//! │  │        Order (config) + PageId + Error/Violation         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Order, PageId, Error)
//! - [`index`] - Index structures (B-tree)
//!
//! # Quick Start
//! ```
//! use pagetree::{BTree, Order};
//!
//! let mut tree = BTree::new(Order::new(1).unwrap());
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key, key * 100);
//! }
//!
//! assert_eq!(tree.find(&4), Some(&400));
//! assert_eq!(tree.len(), 5);
//! tree.check_invariants().unwrap();
//! ```

pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_ORDER, MAX_ORDER};
pub use common::{Error, Order, PageId, Result, Violation};

pub use index::btree::{BTree, SharedTree, TreeStats};
