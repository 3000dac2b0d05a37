//! A cloneable, lock-protected handle to a [`BTree`].
//!
//! The tree itself has no internal locking. [`SharedTree`] serializes
//! access from the outside: one writer at a time, any number of readers.
//! An insert holds the write lock across its whole split cascade, so
//! readers never observe a half-applied split.

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::common::{Order, Result};

use super::stats::TreeStats;
use super::tree::BTree;

/// Shared handle over `Arc<RwLock<BTree>>`.
///
/// # Example
/// ```
/// use pagetree::SharedTree;
/// use std::thread;
///
/// let tree = SharedTree::default();
/// let writer = {
///     let tree = tree.clone();
///     thread::spawn(move || {
///         for key in 0..100 {
///             tree.insert(key, key * 2);
///         }
///     })
/// };
/// writer.join().unwrap();
///
/// assert_eq!(tree.get(&21), Some(42));
/// assert_eq!(tree.len(), 100);
/// ```
pub struct SharedTree<K, V> {
    inner: Arc<RwLock<BTree<K, V>>>,
}

impl<K, V> SharedTree<K, V> {
    /// Create an empty shared tree of the given order.
    pub fn new(order: Order) -> Self {
        Self::from_tree(BTree::new(order))
    }

    /// Wrap an existing tree.
    pub fn from_tree(tree: BTree<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Acquire the read lock for a compound read.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, BTree<K, V>> {
        self.inner.read()
    }

    /// Acquire the write lock for a compound update.
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, BTree<K, V>> {
        self.inner.write()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Walk every entry in key order while holding the read lock.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&K, &V),
    {
        self.inner.read().for_each(visit);
    }

    pub fn stats(&self) -> TreeStats {
        self.inner.read().stats()
    }
}

impl<K: Ord, V> SharedTree<K, V> {
    /// Insert under the write lock. See [`BTree::insert`].
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }
}

impl<K: Ord, V: Clone> SharedTree<K, V> {
    /// Look up `key` and clone its value out from under the read lock.
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.read().find(key).cloned()
    }
}

impl<K: Ord + Debug, V> SharedTree<K, V> {
    /// Run the invariant checker under the read lock.
    pub fn check_invariants(&self) -> Result<()> {
        self.inner.read().check_invariants()
    }
}

impl<K, V> Clone for SharedTree<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Default for SharedTree<K, V> {
    fn default() -> Self {
        Self::new(Order::default())
    }
}

impl<K, V> From<BTree<K, V>> for SharedTree<K, V> {
    fn from(tree: BTree<K, V>) -> Self {
        Self::from_tree(tree)
    }
}
