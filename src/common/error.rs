//! Error types for pagetree.

use thiserror::Error;

use super::config::MAX_ORDER;
use super::page_id::PageId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagetree.
///
/// Normal tree operations never fail: lookups signal absence with `None`
/// and inserts always complete. Errors only come from construction and
/// from the invariant checker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The order parameter is outside `1..=MAX_ORDER`.
    #[error("invalid order {0}: must be between 1 and {max}", max = MAX_ORDER)]
    InvalidOrder(usize),

    /// The invariant checker found a structural defect.
    #[error("invariant violated: {0}")]
    Invariant(#[from] Violation),
}

/// A broken structural rule, as reported by the invariant checker.
///
/// Keys are rendered with their `Debug` representation so the violation
/// does not have to carry the tree's key type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A page holds more than `max_children` children.
    #[error("{page} has too many children ({children} > {max})")]
    TooManyChildren {
        page: PageId,
        children: usize,
        max: usize,
    },

    /// A page holds more than `max_entries` entries.
    #[error("{page} has too many entries ({entries} > {max})")]
    TooManyEntries {
        page: PageId,
        entries: usize,
        max: usize,
    },

    /// An internal, non-root page holds fewer than `min_children` children.
    #[error("{page} has too few children ({children} < {min})")]
    TooFewChildren {
        page: PageId,
        children: usize,
        min: usize,
    },

    /// An internal root holds fewer than two children.
    #[error("root {page} has too few children ({children} < 2)")]
    RootTooFewChildren { page: PageId, children: usize },

    /// An internal page with `n` children does not hold `n - 1` entries.
    #[error("{page} has {children} children but {entries} entries")]
    EntryChildMismatch {
        page: PageId,
        entries: usize,
        children: usize,
    },

    /// A page's parent does not list it among its children.
    #[error("{page} is not a child of its parent {parent}")]
    WrongParent { page: PageId, parent: PageId },

    /// The root page has a parent reference.
    #[error("root {page} has parent {parent}")]
    RootHasParent { page: PageId, parent: PageId },

    /// A leaf sits at a different depth than the first leaf seen.
    #[error("leaf {page} at depth {depth}, expected {expected}")]
    UnevenLeafDepth {
        page: PageId,
        depth: usize,
        expected: usize,
    },

    /// A non-root page holds no entries.
    #[error("{page} is empty")]
    EmptyPage { page: PageId },

    /// Entries within a page are not strictly increasing.
    #[error("{page}: NOT entries[{index}].key {left} < following key {right}")]
    EntriesOutOfOrder {
        page: PageId,
        index: usize,
        left: String,
        right: String,
    },

    /// `child[i].last_key < entries[i].key` does not hold.
    #[error("{page}: NOT child[{index}].last_key {child_key} < entries[{index}].key {separator}")]
    ChildNotBelowSeparator {
        page: PageId,
        index: usize,
        child_key: String,
        separator: String,
    },

    /// `entries[i].key < child[i + 1].first_key` does not hold.
    #[error("{page}: NOT entries[{index}].key {separator} < right child first_key {child_key}")]
    ChildNotAboveSeparator {
        page: PageId,
        index: usize,
        separator: String,
        child_key: String,
    },

    /// The tree's entry count disagrees with the entries it can reach.
    #[error("tree records {recorded} entries but holds {counted}")]
    LenMismatch { recorded: usize, counted: usize },
}
