#![cfg(test)]

use super::*;
use crate::persist::{DecodeError, MAX_DECODED_LEN, Persist};

/// Builds the encoded form of a map from its header and the head-to-tail pairs of each bucket.
fn map_bytes(len: usize, buckets: &[&[(i32, i32)]]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend(len.to_ne_bytes());
    bytes.extend(buckets.len().to_ne_bytes());
    for chain in buckets {
        bytes.extend(chain.len().to_ne_bytes());
        for (key, value) in *chain {
            bytes.extend(key.to_ne_bytes());
            bytes.extend(value.to_ne_bytes());
        }
    }
    bytes
}

#[test]
fn test_new() {
    let map = ChainedHashMap::new();
    assert_eq!(map.cap(), DEFAULT_CAP);
    assert!(map.is_empty());
    assert_eq!(ChainedHashMap::with_cap(0).cap(), 1, "A zero capacity should be raised.");
}

#[test]
fn test_duplicate_keys() {
    let mut map = ChainedHashMap::new();
    map.insert(1, 100);
    map.insert(1, 200);
    map.insert(1, 300);

    assert_eq!(map.len(), 3, "Every insertion should add an entry.");
    assert_eq!(map.get(1), Some(300), "The most recent value should be found first.");

    assert_eq!(map.remove(1), Some(300));
    assert_eq!(map.get(1), Some(200), "Removal should uncover the older value.");
    assert_eq!(map.len(), 2);

    map.remove(1);
    map.remove(1);
    assert_eq!(map.get(1), None);
    assert!(map.is_empty());
}

#[test]
fn test_collisions() {
    let mut map = ChainedHashMap::with_cap(5);
    map.insert(0, 100);
    map.insert(5, 200);
    map.insert(-10, 300);
    map.insert(3, 400);

    assert_eq!(map.get(0), Some(100));
    assert_eq!(map.get(5), Some(200));
    assert_eq!(map.get(-10), Some(300));
    assert!(!map.contains(10), "Keys of equal magnitude shouldn't be confused.");

    assert_eq!(map.remove(5), Some(200), "Interior nodes should be unlinked.");
    assert_eq!(map.get(0), Some(100));
    assert_eq!(map.get(-10), Some(300));
    assert!(map.iter().eq([(-10, 300), (0, 100), (3, 400)]));
    assert_eq!(map.cap(), 5, "The bucket count should never change.");
}

#[test]
fn test_remove_absent_is_noop() {
    let mut map = ChainedHashMap::from_iter([(1, 1), (9, 9), (2, 2)]);
    let before = map.to_bytes().unwrap();

    assert_eq!(map.remove(17), None);
    assert_eq!(map.len(), 3);
    assert_eq!(map.to_bytes().unwrap(), before);
}

#[test]
fn test_i32_min_key() {
    let mut map = ChainedHashMap::with_cap(10);
    map.insert(i32::MIN, 1);
    assert_eq!(map.get(i32::MIN), Some(1));
    assert_eq!(map.remove(i32::MIN), Some(1));
}

#[test]
fn test_encode_format() {
    let mut map = ChainedHashMap::with_cap(3);
    map.insert(3, 30);
    map.insert(6, 60);
    map.insert(2, 20);

    assert_eq!(
        map.to_bytes().unwrap(),
        map_bytes(3, &[&[(6, 60), (3, 30)], &[], &[(2, 20)]]),
        "Chains should be written head to tail with their lengths."
    );
}

#[test]
fn test_round_trip_preserves_chain_order() {
    let mut map = ChainedHashMap::with_cap(4);
    for (key, value) in [(1, 1), (5, 5), (1, 2), (9, 9), (2, 2), (-6, 6)] {
        map.insert(key, value);
    }

    let bytes = map.to_bytes().unwrap();
    let decoded = ChainedHashMap::from_bytes(&bytes).unwrap();
    assert_eq!(
        decoded.to_bytes().unwrap(),
        bytes,
        "Decoding should reproduce every chain in the same order."
    );
    assert!(decoded.iter().eq(map.iter()));
    assert_eq!(decoded.get(1), Some(2), "Duplicates should keep their precedence.");
}

#[test]
fn test_decode_errors() {
    assert!(matches!(
        ChainedHashMap::from_bytes(&map_bytes(0, &[])),
        Err(DecodeError::ZeroCapacity(_))
    ));
    assert!(
        matches!(
            ChainedHashMap::from_bytes(&map_bytes(2, &[&[(1, 1)]])),
            Err(DecodeError::SizeMismatch(_))
        ),
        "The declared size should match the decoded entries."
    );

    let mut oversized = Vec::new();
    oversized.extend(0usize.to_ne_bytes());
    oversized.extend(1usize.to_ne_bytes());
    oversized.extend((MAX_DECODED_LEN + 1).to_ne_bytes());
    assert!(
        matches!(
            ChainedHashMap::from_bytes(&oversized),
            Err(DecodeError::Oversized(_))
        ),
        "Absurd chain lengths should be rejected before reading."
    );

    let mut truncated = map_bytes(1, &[&[(1, 1)]]);
    truncated.truncate(truncated.len() - 2);
    assert!(matches!(
        ChainedHashMap::from_bytes(&truncated),
        Err(DecodeError::Truncated(_))
    ));
}

#[test]
fn test_restore() {
    let mut map = ChainedHashMap::from_iter([(1, 1), (2, 2)]);
    let other = ChainedHashMap::from_iter([(7, 70), (7, 71)]);

    map.restore(&mut other.to_bytes().unwrap().as_slice()).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(7), Some(71));
    assert_eq!(map.get(1), None, "Restoring should replace, not merge.");

    assert!(map.restore(&mut map_bytes(0, &[]).as_slice()).is_err());
    assert!(map.is_empty(), "A failed restore should leave the map empty.");
}

#[cfg(all(feature = "fs", target_os = "linux"))]
#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chained.bin");

    let map = ChainedHashMap::from_iter((0..40).map(|k| (k % 13, k)));
    map.save(&path).unwrap();

    let mut loaded = ChainedHashMap::new();
    loaded.load(&path).unwrap();
    assert_eq!(loaded.to_bytes().unwrap(), map.to_bytes().unwrap());
    assert_eq!(loaded.get(0), Some(39));
}

#[test]
fn test_formatting() {
    let mut map = ChainedHashMap::with_cap(2);
    map.insert(2, 20);
    map.insert(4, 40);

    assert_eq!(map.to_string(), "#{4: 40, 2: 20}");
    let debug = format!("{map:?}");
    assert!(debug.contains("(4: 40) -> (2: 20)"), "Debug output should draw each chain.");
    assert!(debug.contains("-"), "Empty buckets should be marked.");
}
