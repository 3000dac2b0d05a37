//! Structural invariant checker.
//!
//! Walks the whole tree depth-first, children before their parent, and
//! stops at the first broken rule:
//!
//! 1. Every page has at most `max_children` children and `max_entries` entries.
//! 2. Every non-leaf, non-root page has at least `min_children` children.
//! 3. The root has at least two children if it is not a leaf.
//! 4. A non-leaf page with `n` children holds `n - 1` entries.
//! 5. Every non-root page is listed by its parent, and every listed child
//!    points back at the page listing it.
//! 6. All leaves sit at the same depth.
//! 7. `last_key(child[i]) < entries[i].key < first_key(child[i + 1])`.
//!
//! It also checks that entries within a page strictly increase, that no
//! non-root page is empty, and that the tree's count matches its contents.
//! The checker only reads the tree.

use std::fmt::Debug;

use tracing::debug;

use crate::common::{Error, PageId, Result, Violation};

use super::tree::BTree;

type Check = std::result::Result<(), Violation>;

fn render<K: Debug>(key: Option<&K>) -> String {
    match key {
        Some(key) => format!("{:?}", key),
        None => "<none>".to_string(),
    }
}

impl<K: Ord + Debug, V> BTree<K, V> {
    /// Verify every structural invariant, reporting the first violation.
    ///
    /// An empty tree passes trivially.
    pub fn check_invariants(&self) -> Result<()> {
        self.validate_tree().map_err(|violation| {
            debug!(%violation, "invariant check failed");
            Error::from(violation)
        })
    }

    /// Like [`check_invariants`](Self::check_invariants), but panics.
    ///
    /// # Panics
    /// Panics with the violation's description if any invariant is broken.
    pub fn assert_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }

    fn validate_tree(&self) -> Check {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(()),
                recorded => Err(Violation::LenMismatch {
                    recorded,
                    counted: 0,
                }),
            };
        };

        if let Some(parent) = self.pages[root].parent {
            return Err(Violation::RootHasParent { page: root, parent });
        }

        let mut leaf_depth = None;
        let mut counted = 0;
        self.validate_subtree(root, 0, &mut leaf_depth, &mut counted)?;

        if counted != self.len {
            return Err(Violation::LenMismatch {
                recorded: self.len,
                counted,
            });
        }
        Ok(())
    }

    fn validate_subtree(
        &self,
        page_id: PageId,
        depth: usize,
        leaf_depth: &mut Option<usize>,
        counted: &mut usize,
    ) -> Check {
        for &child in &self.pages[page_id].children {
            self.validate_subtree(child, depth + 1, leaf_depth, counted)?;
        }

        *counted += self.pages[page_id].entries.len();
        self.validate_page(page_id, depth, leaf_depth)
    }

    fn validate_page(&self, page_id: PageId, depth: usize, leaf_depth: &mut Option<usize>) -> Check {
        let page = &self.pages[page_id];
        let is_leaf = page.is_leaf();
        let is_root = page.is_root();
        let entries = page.entries.len();
        let children = page.children.len();

        // 1.
        if children > self.order.max_children() {
            return Err(Violation::TooManyChildren {
                page: page_id,
                children,
                max: self.order.max_children(),
            });
        }
        if entries > self.order.max_entries() {
            return Err(Violation::TooManyEntries {
                page: page_id,
                entries,
                max: self.order.max_entries(),
            });
        }

        // 2.
        if !is_leaf && !is_root && children < self.order.min_children() {
            return Err(Violation::TooFewChildren {
                page: page_id,
                children,
                min: self.order.min_children(),
            });
        }

        // 3.
        if is_root && !is_leaf && children < 2 {
            return Err(Violation::RootTooFewChildren {
                page: page_id,
                children,
            });
        }

        // 4.
        if !is_leaf && entries != children - 1 {
            return Err(Violation::EntryChildMismatch {
                page: page_id,
                entries,
                children,
            });
        }

        // 5.
        if let Some(parent) = page.parent {
            if !self.pages[parent].children.iter().any(|&c| c == page_id) {
                return Err(Violation::WrongParent {
                    page: page_id,
                    parent,
                });
            }
        }
        for &child in &page.children {
            if self.pages[child].parent != Some(page_id) {
                return Err(Violation::WrongParent {
                    page: child,
                    parent: page_id,
                });
            }
        }

        if !is_root && entries == 0 {
            return Err(Violation::EmptyPage { page: page_id });
        }

        let keys = page.entries.as_slice();
        for (index, pair) in keys.windows(2).enumerate() {
            if pair[0].key >= pair[1].key {
                return Err(Violation::EntriesOutOfOrder {
                    page: page_id,
                    index,
                    left: format!("{:?}", pair[0].key),
                    right: format!("{:?}", pair[1].key),
                });
            }
        }

        // 6.
        if is_leaf {
            match *leaf_depth {
                None => *leaf_depth = Some(depth),
                Some(expected) if expected != depth => {
                    return Err(Violation::UnevenLeafDepth {
                        page: page_id,
                        depth,
                        expected,
                    });
                }
                Some(_) => {}
            }
            return Ok(());
        }

        // 7.
        for (index, entry) in page.entries.iter().enumerate() {
            let below = page.children.get(index).map(|&c| &self.pages[c]);
            let above = page.children.get(index + 1).map(|&c| &self.pages[c]);

            let child_key = below.and_then(|child| child.last_key());
            if !matches!(child_key, Some(key) if *key < entry.key) {
                return Err(Violation::ChildNotBelowSeparator {
                    page: page_id,
                    index,
                    child_key: render(child_key),
                    separator: format!("{:?}", entry.key),
                });
            }

            let child_key = above.and_then(|child| child.first_key());
            if !matches!(child_key, Some(key) if entry.key < *key) {
                return Err(Violation::ChildNotAboveSeparator {
                    page: page_id,
                    index,
                    separator: format!("{:?}", entry.key),
                    child_key: render(child_key),
                });
            }
        }

        Ok(())
    }
}
