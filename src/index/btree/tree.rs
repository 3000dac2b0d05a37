//! The public B-tree handle: insert, lookup, ordered traversal, splitting.

use std::fmt;

use tracing::{debug, trace};

use crate::common::{Order, PageId, Result};

use super::page::PageStore;
use super::stats::TreeStats;

/// An in-memory B-tree of order `k`.
///
/// Every page holds at most `2k` entries and, when internal, one child
/// more than it has entries. Inserting an existing key overwrites its value.
///
/// The tree is single-threaded: a split mutates several pages in sequence,
/// so callers that need to share it must serialize access themselves (see
/// [`SharedTree`](super::SharedTree)).
///
/// # Example
/// ```
/// use pagetree::BTree;
///
/// let mut tree = BTree::default();
/// tree.insert(2, "two");
/// tree.insert(1, "one");
///
/// assert_eq!(tree.find(&1), Some(&"one"));
/// assert_eq!(tree.find(&3), None);
///
/// let mut keys = Vec::new();
/// tree.for_each(|key, _| keys.push(*key));
/// assert_eq!(keys, vec![1, 2]);
/// ```
pub struct BTree<K, V> {
    pub(crate) order: Order,
    pub(crate) pages: PageStore<K, V>,
    pub(crate) root: Option<PageId>,
    pub(crate) len: usize,
    splits: u64,
    root_splits: u64,
}

impl<K, V> BTree<K, V> {
    /// Create an empty tree of the given order.
    pub fn new(order: Order) -> Self {
        Self {
            order,
            pages: PageStore::new(),
            root: None,
            len: 0,
            splits: 0,
            root_splits: 0,
        }
    }

    /// Create an empty tree, validating the raw order `k`.
    pub fn with_order(k: usize) -> Result<Self> {
        Ok(Self::new(Order::new(k)?))
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Number of distinct keys in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels; 0 for an empty tree, 1 for a lone root.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut next = self.root;
        while let Some(page_id) = next {
            height += 1;
            next = self.pages[page_id].children.first().copied();
        }
        height
    }

    /// Visit every entry in ascending key order.
    ///
    /// This is one synchronous walk over the whole tree; it cannot be
    /// paused or resumed.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&K, &V),
    {
        if let Some(root) = self.root {
            self.pages.traverse(root, &mut visit);
        }
    }

    /// Point-in-time structural statistics.
    pub fn stats(&self) -> TreeStats {
        let leaves = (0..self.pages.len())
            .filter(|&i| self.pages[PageId::new(i)].is_leaf())
            .count();

        TreeStats {
            entries: self.len,
            pages: self.pages.len(),
            leaves,
            height: self.height(),
            max_entries: self.order.max_entries(),
            splits: self.splits,
            root_splits: self.root_splits,
        }
    }
}

impl<K: Ord, V> BTree<K, V> {
    /// Insert `key`, overwriting the value if the key is already present.
    ///
    /// Returns the replaced value on overwrite. Only a new key changes
    /// [`len`](Self::len).
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let leaf = match self.root {
            None => {
                let root = self.pages.allocate(None);
                self.root = Some(root);
                root
            }
            Some(root) => {
                let lookup = self.pages.find(root, &key);
                if let Some(slot) = lookup.slot {
                    if let Some(entry) = self.pages[lookup.page].entries.get_mut(slot) {
                        return Some(std::mem::replace(&mut entry.value, value));
                    }
                }
                lookup.page
            }
        };

        self.pages.add(leaf, key, value);
        self.len += 1;

        if self.pages[leaf].entries.len() > self.order.max_entries() {
            self.split(leaf);
        }
        None
    }

    /// Look up the value stored under `key`.
    pub fn find(&self, key: &K) -> Option<&V> {
        let root = self.root?;
        let lookup = self.pages.find(root, key);
        let slot = lookup.slot?;
        self.pages[lookup.page]
            .entries
            .get(slot)
            .map(|entry| &entry.value)
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let root = self.root?;
        let lookup = self.pages.find(root, key);
        let slot = lookup.slot?;
        self.pages[lookup.page]
            .entries
            .get_mut(slot)
            .map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Split the overflowed page `page_id` and promote its median.
    ///
    /// Recurses upward while the parent overflows; a split of the root is
    /// the only way the tree grows a level.
    fn split(&mut self, page_id: PageId) {
        let min_entries = self.order.min_entries();
        let min_children = self.order.min_children();

        let parent = match self.pages[page_id].parent {
            Some(parent) => parent,
            None => {
                let new_root = self.pages.allocate(None);
                self.pages.set_children(new_root, vec![page_id].into());
                self.root = Some(new_root);
                self.root_splits += 1;
                debug!(old_root = %page_id, new_root = %new_root, "tree grew a level");
                new_root
            }
        };

        let right = self.pages.allocate(Some(parent));
        let moved_entries = self.pages[page_id].entries.split_at(min_entries + 1);
        self.pages[right].entries = moved_entries;

        if !self.pages[page_id].is_leaf() {
            let moved_children = self.pages[page_id].children.split_at(min_children + 1);
            self.pages.set_children(right, moved_children);
        }

        let median = self.pages[page_id].entries.pop();
        self.pages[parent].entries.add(median);
        self.pages[parent].children.add(right);
        self.pages.sort(parent);
        self.splits += 1;

        trace!(page = %page_id, right = %right, parent = %parent, "split page");

        if self.pages[parent].entries.len() > self.order.max_entries() {
            self.split(parent);
        }
    }
}

impl<K, V> Default for BTree<K, V> {
    fn default() -> Self {
        Self::new(Order::default())
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = BTree::default();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for BTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.for_each(|key, value| {
            map.entry(key, value);
        });
        map.finish()
    }
}
