//! Configuration for pagetree.
//!
//! The only tuning knob is the tree order `k`. Every page capacity is
//! derived from it:
//!
//! | capacity       | formula              | k = 1 |
//! |----------------|----------------------|-------|
//! | `max_entries`  | `2k`                 | 2     |
//! | `min_entries`  | `max_entries / 2`    | 1     |
//! | `max_children` | `max_entries + 1`    | 3     |
//! | `min_children` | `max_children / 2`   | 1     |
//!
//! With the default order of 1 the tree is a 2-3 tree.

use super::error::{Error, Result};

/// Order used by [`Order::default`] and `BTree::default`.
pub const DEFAULT_ORDER: usize = 1;

/// Largest accepted order.
///
/// Pages scan their entries linearly, so very wide pages only cost time.
pub const MAX_ORDER: usize = 1 << 16;

/// The order `k` of a tree, validated at construction time.
///
/// # Example
/// ```
/// use pagetree::Order;
///
/// let order = Order::new(2).unwrap();
/// assert_eq!(order.max_entries(), 4);
/// assert_eq!(order.max_children(), 5);
/// assert!(Order::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Order(usize);

impl Order {
    /// Validate `k` and build an order from it.
    ///
    /// Returns [`Error::InvalidOrder`] unless `1 <= k <= MAX_ORDER`.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 || k > MAX_ORDER {
            return Err(Error::InvalidOrder(k));
        }
        Ok(Order(k))
    }

    /// The raw order parameter `k`.
    #[inline]
    pub fn k(&self) -> usize {
        self.0
    }

    /// Maximum number of entries a page may hold.
    #[inline]
    pub fn max_entries(&self) -> usize {
        2 * self.0
    }

    /// Index of the median entry promoted by a split.
    #[inline]
    pub fn min_entries(&self) -> usize {
        self.max_entries() / 2
    }

    /// Maximum number of children an internal page may hold.
    #[inline]
    pub fn max_children(&self) -> usize {
        self.max_entries() + 1
    }

    /// Minimum number of children of an internal, non-root page.
    #[inline]
    pub fn min_children(&self) -> usize {
        self.max_children() / 2
    }
}

impl Default for Order {
    fn default() -> Self {
        Order(DEFAULT_ORDER)
    }
}

impl TryFrom<usize> for Order {
    type Error = Error;

    fn try_from(k: usize) -> Result<Self> {
        Order::new(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_two_three_tree() {
        let order = Order::default();
        assert_eq!(order.k(), 1);
        assert_eq!(order.max_entries(), 2);
        assert_eq!(order.min_entries(), 1);
        assert_eq!(order.max_children(), 3);
        assert_eq!(order.min_children(), 1);
    }

    #[test]
    fn test_larger_order_capacities() {
        let order = Order::new(3).unwrap();
        assert_eq!(order.max_entries(), 6);
        assert_eq!(order.min_entries(), 3);
        assert_eq!(order.max_children(), 7);
        assert_eq!(order.min_children(), 3);
    }

    #[test]
    fn test_rejects_out_of_range_orders() {
        assert!(matches!(Order::new(0), Err(Error::InvalidOrder(0))));
        assert!(matches!(
            Order::new(MAX_ORDER + 1),
            Err(Error::InvalidOrder(_))
        ));
        assert!(Order::new(MAX_ORDER).is_ok());
    }

    #[test]
    fn test_try_from() {
        let order: Order = 4usize.try_into().unwrap();
        assert_eq!(order.k(), 4);
    }
}
