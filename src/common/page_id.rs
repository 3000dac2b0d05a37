//! Page identifier type.

use std::fmt;

/// Identifies a page inside a tree's page arena.
///
/// Using `usize` because:
/// 1. Pages are stored in `Vec<Page>`
/// 2. Direct indexing without casting: `pages[page_id.0]`
/// 3. Parent and child links are plain indices, so the tree holds no
///    reference cycles
///
/// # Example
/// ```
/// use pagetree::PageId;
///
/// let page_id = PageId::new(5);
/// assert_eq!(page_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: usize) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_new() {
        let pid = PageId::new(42);
        assert_eq!(pid.0, 42);
    }

    #[test]
    fn test_page_id_ordering() {
        assert!(PageId::new(1) < PageId::new(2));
        assert!(PageId::new(5) > PageId::new(3));
    }

    #[test]
    fn test_page_id_display() {
        assert_eq!(format!("{}", PageId::new(42)), "Page(42)");
    }
}
