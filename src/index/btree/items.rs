//! Ordered item container used for a page's entries and its children.

use std::cmp::Ordering;
use std::slice;

/// A growable ordered sequence with the handful of operations a page needs.
///
/// Order is whatever the caller last established: [`Items::add`] appends
/// without re-sorting, so callers restore order with [`Items::sort_by`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Items<E>(Vec<E>);

impl<E> Items<E> {
    /// Create an empty container.
    pub fn new() -> Self {
        Items(Vec::new())
    }

    /// First element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.0.first()
    }

    /// Last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<&E> {
        self.0.last()
    }

    /// Append an element, keeping the existing order of the others.
    #[inline]
    pub fn add(&mut self, elem: E) {
        self.0.push(elem);
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    /// Panics if the container is empty. Callers only pop from containers
    /// they know to be non-empty.
    pub fn pop(&mut self) -> E {
        self.0.pop().expect("pop from an empty Items container")
    }

    /// Stable sort under a caller-supplied total order.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.0.sort_by(compare);
    }

    /// Split off `[index..]` into a new container, keeping `[0, index)`.
    ///
    /// The tail is moved into its own allocation and the receiver gives up
    /// the spare capacity it no longer needs, so neither half can grow into
    /// the other.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn split_at(&mut self, index: usize) -> Items<E> {
        let tail = self.0.split_off(index);
        self.0.shrink_to_fit();
        Items(tail)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.0.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut E> {
        self.0.get_mut(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, E> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.0
    }
}

impl<E> Default for Items<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for Items<E> {
    fn from(elems: Vec<E>) -> Self {
        Items(elems)
    }
}

impl<E> FromIterator<E> for Items<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Items(iter.into_iter().collect())
    }
}

impl<'a, E> IntoIterator for &'a Items<E> {
    type Item = &'a E;
    type IntoIter = slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_last_on_empty() {
        let items: Items<i32> = Items::new();
        assert_eq!(items.first(), None);
        assert_eq!(items.last(), None);
        assert!(items.is_empty());
    }

    #[test]
    fn test_add_preserves_order() {
        let mut items = Items::new();
        items.add(3);
        items.add(1);
        items.add(2);

        assert_eq!(items.as_slice(), &[3, 1, 2]);
        assert_eq!(items.first(), Some(&3));
        assert_eq!(items.last(), Some(&2));
    }

    #[test]
    fn test_pop_returns_last() {
        let mut items = Items::from(vec![1, 2, 3]);
        assert_eq!(items.pop(), 3);
        assert_eq!(items.as_slice(), &[1, 2]);
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_pop_empty_panics() {
        let mut items: Items<i32> = Items::new();
        items.pop();
    }

    #[test]
    fn test_sort_by_is_stable() {
        let mut items = Items::from(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        items.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(items.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_split_at_partitions() {
        let mut left = Items::from(vec![1, 2, 3, 4, 5]);
        let right = left.split_at(2);

        assert_eq!(left.as_slice(), &[1, 2]);
        assert_eq!(right.as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn test_split_halves_are_independent() {
        let mut left = Items::from(vec![1, 2, 3, 4]);
        let mut right = left.split_at(2);

        // Growing the left half must not touch the detached tail.
        left.add(99);
        right.add(100);

        assert_eq!(left.as_slice(), &[1, 2, 99]);
        assert_eq!(right.as_slice(), &[3, 4, 100]);
    }

    #[test]
    fn test_split_at_bounds() {
        let mut items = Items::from(vec![1, 2]);
        let tail = items.split_at(2);
        assert!(tail.is_empty());
        assert_eq!(items.len(), 2);

        let tail = items.split_at(0);
        assert!(items.is_empty());
        assert_eq!(tail.as_slice(), &[1, 2]);
    }
}
