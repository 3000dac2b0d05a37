//! Property tests for the B-tree.
//!
//! `std::collections::BTreeMap` serves as the model.

use pagetree::{BTree, Order};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn collect_keys<K: Copy, V>(tree: &BTree<K, V>) -> Vec<K> {
    let mut keys = Vec::new();
    tree.for_each(|key, _| keys.push(*key));
    keys
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Invariants hold after every single insert, for several orders.
    #[test]
    fn invariants_hold_after_every_insert(
        keys in prop::collection::vec(any::<i32>(), 0..200),
        k in 1usize..=4,
    ) {
        let mut tree = BTree::new(Order::new(k).unwrap());
        for key in keys {
            tree.insert(key, ());
            prop_assert_eq!(tree.check_invariants(), Ok(()), "key={}", key);
        }
    }

    /// Small key domains force many duplicate inserts.
    #[test]
    fn invariants_hold_with_heavy_duplication(
        keys in prop::collection::vec(0u8..16, 0..300),
    ) {
        let mut tree = BTree::default();
        for key in keys {
            tree.insert(key, key);
            prop_assert!(tree.check_invariants().is_ok());
        }
        prop_assert!(tree.len() <= 16);
    }

    /// `for_each` yields the sorted, duplicate-free set of inserted keys.
    #[test]
    fn traversal_is_sorted_and_complete(keys in prop::collection::vec(any::<i8>(), 0..300)) {
        let tree: BTree<i8, ()> = keys.iter().map(|&key| (key, ())).collect();

        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(collect_keys(&tree), expected);
    }

    /// `len` counts distinct keys.
    #[test]
    fn len_counts_distinct_keys(keys in prop::collection::vec(any::<i8>(), 0..300)) {
        let mut tree = BTree::default();
        let mut model = BTreeMap::new();
        for key in keys {
            tree.insert(key, ());
            model.insert(key, ());
            prop_assert_eq!(tree.len(), model.len());
        }
    }

    /// Lookups agree with the model: last value wins, absent keys miss.
    #[test]
    fn find_agrees_with_model(
        pairs in prop::collection::vec((any::<i16>(), any::<u32>()), 0..200),
        probes in prop::collection::vec(any::<i16>(), 0..50),
        k in 1usize..=3,
    ) {
        let mut tree = BTree::new(Order::new(k).unwrap());
        let mut model = BTreeMap::new();
        for (key, value) in pairs {
            prop_assert_eq!(tree.insert(key, value), model.insert(key, value));
        }

        for (key, value) in &model {
            prop_assert_eq!(tree.find(key), Some(value));
        }
        for probe in probes {
            prop_assert_eq!(tree.find(&probe), model.get(&probe));
        }
    }
}
