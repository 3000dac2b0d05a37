//! Tree statistics.

use std::fmt;

/// A point-in-time snapshot of a tree's shape.
///
/// Produced by `BTree::stats`. Plain values, so it can be printed,
/// compared and logged freely.
///
/// # Example
/// ```
/// use pagetree::BTree;
///
/// let tree: BTree<u32, ()> = (0..100).map(|k| (k, ())).collect();
/// let stats = tree.stats();
/// assert_eq!(stats.entries, 100);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Number of distinct keys.
    pub entries: usize,

    /// Number of pages, internal and leaf.
    pub pages: usize,

    /// Number of leaf pages.
    pub leaves: usize,

    /// Number of levels (0 when empty).
    pub height: usize,

    /// Per-page entry capacity (`2k`).
    pub max_entries: usize,

    /// Page splits performed since the tree was created.
    pub splits: u64,

    /// Splits that grew the tree by a level.
    pub root_splits: u64,
}

impl TreeStats {
    /// Fraction of entry slots in use (0.0 to 1.0).
    pub fn fill_ratio(&self) -> f64 {
        let capacity = self.pages * self.max_entries;
        if capacity == 0 {
            0.0
        } else {
            self.entries as f64 / capacity as f64
        }
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TreeStats {{ entries: {}, pages: {}, leaves: {}, height: {}, splits: {}, fill: {:.2}% }}",
            self.entries,
            self.pages,
            self.leaves,
            self.height,
            self.splits,
            self.fill_ratio() * 100.0
        )
    }
}
