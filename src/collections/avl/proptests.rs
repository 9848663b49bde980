#![cfg(test)]

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::tests::assert_invariants;
use super::*;
use crate::persist::Persist;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Remove(i32),
    Find(i32),
}

fn key_strategy() -> impl Strategy<Value = i32> + Clone {
    // A narrow range makes duplicate inserts and hits on removal common. -1 is left out so that
    // every tree can be encoded.
    (-200i32..200).prop_filter("null marker", |k| *k != -1)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let key = key_strategy();
    let op = prop_oneof![
        50 => key.clone().prop_map(Op::Insert),
        30 => key.clone().prop_map(Op::Remove),
        20 => key.clone().prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_btree_set(ops in ops_strategy()) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key), model.insert(key));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(key), model.remove(&key));
                }
                Op::Find(key) => {
                    prop_assert_eq!(tree.find(key), model.contains(&key));
                }
            }

            assert_invariants(&tree);
            prop_assert_eq!(tree.len(), model.len());
        }

        prop_assert!(tree.iter().eq(model.iter().copied()));
    }

    #[test]
    fn prop_round_trip(keys in prop::collection::vec(key_strategy(), 0..=300)) {
        let tree = AvlTree::from_iter(keys.iter().copied());
        let decoded = AvlTree::from_bytes(&tree.to_bytes().unwrap()).unwrap();

        assert_invariants(&decoded);
        prop_assert_eq!(decoded.to_bytes().unwrap(), tree.to_bytes().unwrap());
        for key in -210..210 {
            prop_assert_eq!(decoded.find(key), tree.find(key));
        }
    }
}
