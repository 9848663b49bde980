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
    let key = -32i32..32;
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

    // Each key is modelled as a stack of values, newest last.
    #[test]
    fn prop_equivalence_with_value_stacks(cap in 1usize..12, ops in ops_strategy()) {
        let mut map = ChainedHashMap::with_cap(cap);
        let mut model: HashMap<i32, Vec<i32>> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    map.insert(key, value);
                    model.entry(key).or_default().push(value);
                }
                Op::Remove(key) => {
                    let expected = model.get_mut(&key).and_then(Vec::pop);
                    prop_assert_eq!(map.remove(key), expected);
                }
                Op::Get(key) => {
                    let expected = model.get(&key).and_then(|values| values.last().copied());
                    prop_assert_eq!(map.get(key), expected);
                }
            }

            prop_assert_eq!(map.len(), model.values().map(Vec::len).sum::<usize>());
        }
    }

    #[test]
    fn prop_round_trip(cap in 1usize..12, ops in ops_strategy()) {
        let mut map = ChainedHashMap::with_cap(cap);
        for op in ops {
            match op {
                Op::Insert(key, value) => map.insert(key, value),
                Op::Remove(key) => {
                    map.remove(key);
                }
                Op::Get(_) => (),
            }
        }

        let bytes = map.to_bytes().unwrap();
        let decoded = ChainedHashMap::from_bytes(&bytes).unwrap();
        prop_assert_eq!(decoded.to_bytes().unwrap(), bytes);
        prop_assert!(decoded.iter().eq(map.iter()));
    }
}
