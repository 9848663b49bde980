#![cfg(test)]

use std::collections::HashMap;

use proptest::prelude::*;

use super::*;
use crate::persist::Persist;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32, i32),
    Remove(i32),
    Get(i32),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // Negative keys share buckets with their positive counterparts, which keeps collisions common.
    let key = -64i32..64;
    let op = prop_oneof![
        50 => (key.clone(), any::<i32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        30 => key.clone().prop_map(Op::Remove),
        20 => key.prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_hash_map(cap in 1usize..16, ops in ops_strategy()) {
        let mut map = OpenHashMap::with_cap(cap);
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key, value), model.insert(key, value));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(map.remove(key), model.remove(&key));
                }
                Op::Get(key) => {
                    prop_assert_eq!(map.get(key), model.get(&key).copied());
                }
            }

            prop_assert_eq!(map.len(), model.len());
            prop_assert!(map.len() * 10 <= map.cap() * 7 + 10, "Load factor exceeded.");
        }

        let mut entries: Vec<_> = map.iter().collect();
        let mut expected: Vec<_> = model.into_iter().collect();
        entries.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn prop_round_trip(ops in ops_strategy()) {
        let mut map = OpenHashMap::new();
        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    map.insert(key, value);
                }
                Op::Remove(key) => {
                    map.remove(key);
                }
                Op::Get(_) => (),
            }
        }

        let bytes = map.to_bytes().unwrap();
        let decoded = OpenHashMap::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded.to_bytes().unwrap(), bytes);
        for key in -70..70 {
            prop_assert_eq!(decoded.get(key), map.get(key));
        }
    }
}
