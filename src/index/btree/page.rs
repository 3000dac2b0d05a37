//! Pages - the nodes of the tree - and the arena that owns them.
//!
//! A [`Page`] holds sorted entries and, when internal, one more child than
//! it has entries. Pages never point at each other directly: parent and
//! child links are [`PageId`]s into the owning [`PageStore`], so the
//! parent back-reference is an index reassignment rather than a shared
//! pointer.

use std::ops::{Index, IndexMut};

use crate::common::PageId;

use super::items::Items;

/// A key/value pair stored in a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

/// A node of the tree.
#[derive(Debug)]
pub struct Page<K, V> {
    /// Owning page, or `None` for the root.
    pub(crate) parent: Option<PageId>,
    /// Entries, strictly increasing by key.
    pub(crate) entries: Items<Entry<K, V>>,
    /// Child pages; empty for leaves.
    pub(crate) children: Items<PageId>,
}

impl<K, V> Page<K, V> {
    fn new(parent: Option<PageId>) -> Self {
        Self {
            parent,
            entries: Items::new(),
            children: Items::new(),
        }
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn parent(&self) -> Option<PageId> {
        self.parent
    }

    #[inline]
    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(|entry| &entry.key)
    }

    #[inline]
    pub fn last_key(&self) -> Option<&K> {
        self.entries.last().map(|entry| &entry.key)
    }
}

/// Outcome of [`PageStore::find`].
///
/// `page` is always meaningful: the page holding the key when `slot` is
/// `Some`, otherwise the leaf the key would be inserted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub page: PageId,
    pub slot: Option<usize>,
}

/// Arena of pages, indexed by [`PageId`].
///
/// Pages are only ever appended. A tree never detaches a page (a superseded
/// root becomes a child of the new one), so every allocated page stays
/// reachable and is dropped together with the store.
#[derive(Debug)]
pub struct PageStore<K, V> {
    pages: Vec<Page<K, V>>,
}

impl<K, V> PageStore<K, V> {
    pub fn new() -> Self {
        Self { pages: Vec::new() }
    }

    /// Allocate an empty page owned by `parent`.
    pub fn allocate(&mut self, parent: Option<PageId>) -> PageId {
        let page_id = PageId::new(self.pages.len());
        self.pages.push(Page::new(parent));
        page_id
    }

    /// Number of allocated pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Replace the children of `page_id` and reparent each of them to it.
    ///
    /// The previous parent reference of every incoming page is overwritten.
    pub fn set_children(&mut self, page_id: PageId, incoming: Items<PageId>) {
        for &child in &incoming {
            self[child].parent = Some(page_id);
        }
        self[page_id].children = incoming;
    }

    /// Depth-first in-order walk of the subtree rooted at `page_id`.
    pub fn traverse<F>(&self, page_id: PageId, visit: &mut F)
    where
        F: FnMut(&K, &V),
    {
        let page = &self[page_id];
        for (i, entry) in page.entries.iter().enumerate() {
            if let Some(&child) = page.children.get(i) {
                self.traverse(child, visit);
            }
            visit(&entry.key, &entry.value);
        }

        if let Some(&child) = page.children.get(page.entries.len()) {
            self.traverse(child, visit);
        }
    }
}

impl<K: Ord, V> PageStore<K, V> {
    /// Search the subtree rooted at `page_id` for `key`.
    ///
    /// Scans the page's entries in order. An exact match stops the search;
    /// the first greater key sends it into the child just before that key,
    /// and running off the end sends it into the last child. A leaf that
    /// does not hold the key is where the key belongs.
    pub fn find(&self, page_id: PageId, key: &K) -> Lookup {
        let page = &self[page_id];

        let mut i = 0;
        for entry in &page.entries {
            if *key == entry.key {
                return Lookup {
                    page: page_id,
                    slot: Some(i),
                };
            }
            if *key < entry.key {
                break;
            }
            i += 1;
        }

        match page.children.get(i) {
            Some(&child) => self.find(child, key),
            None => Lookup {
                page: page_id,
                slot: None,
            },
        }
    }

    /// Append an entry to `page_id` and restore its ordering.
    pub fn add(&mut self, page_id: PageId, key: K, value: V) {
        self[page_id].entries.add(Entry { key, value });
        self.sort(page_id);
    }

    /// Re-sort the entries and children of `page_id`.
    ///
    /// Children are ordered by `last_key(a) < first_key(b)`; their key
    /// ranges are disjoint, so this is a total order over them.
    pub fn sort(&mut self, page_id: PageId) {
        self[page_id]
            .entries
            .sort_by(|a, b| a.key.cmp(&b.key));

        let mut children = std::mem::take(&mut self[page_id].children);
        children.sort_by(|&a, &b| {
            if self[a].last_key() < self[b].first_key() {
                std::cmp::Ordering::Less
            } else if self[b].last_key() < self[a].first_key() {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        self[page_id].children = children;
    }
}

impl<K, V> Default for PageStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Index<PageId> for PageStore<K, V> {
    type Output = Page<K, V>;

    #[inline]
    fn index(&self, page_id: PageId) -> &Page<K, V> {
        &self.pages[page_id.0]
    }
}

impl<K, V> IndexMut<PageId> for PageStore<K, V> {
    #[inline]
    fn index_mut(&mut self, page_id: PageId) -> &mut Page<K, V> {
        &mut self.pages[page_id.0]
    }
}
