#![cfg(test)]

use super::*;
use crate::persist::{DecodeError, EncodeError, Persist};

/// Walks the whole tree, checking ordering, cached heights, balance factors and the length.
pub(crate) fn assert_invariants(tree: &AvlTree) {
    fn check(branch: &Branch, lower: Option<i32>, upper: Option<i32>) -> (u32, usize) {
        let Some(node) = branch.as_deref() else {
            return (0, 0);
        };

        assert!(
            lower.is_none_or(|l| l < node.key) && upper.is_none_or(|u| node.key < u),
            "Key {} should be ordered relative to its ancestors.",
            node.key
        );

        let (left_height, left_count) = check(&node.left, lower, Some(node.key));
        let (right_height, right_count) = check(&node.right, Some(node.key), upper);

        assert_eq!(
            node.height,
            1 + left_height.max(right_height),
            "Cached height of {} should be derived from its children.",
            node.key
        );
        assert!(
            (left_height as i64 - right_height as i64).abs() <= 1,
            "Node {} should have a balance factor of -1, 0 or 1.",
            node.key
        );

        (node.height, left_count + right_count + 1)
    }

    let (_, count) = check(&tree.root, None, None);
    assert_eq!(count, tree.len(), "Length should match the number of reachable nodes.");
}

fn keys_to_bytes(keys: &[i32]) -> Vec<u8> {
    keys.iter().flat_map(|k| k.to_ne_bytes()).collect()
}

#[test]
fn test_single_rotations() {
    let tree = AvlTree::from_iter([30, 20, 10]);
    assert_eq!(tree.root(), Some(20), "Left-left insertion should rotate right.");
    assert!([10, 20, 30].into_iter().all(|k| tree.find(k)));
    assert_invariants(&tree);

    let tree = AvlTree::from_iter([10, 20, 30]);
    assert_eq!(tree.root(), Some(20), "Right-right insertion should rotate left.");
    assert!([10, 20, 30].into_iter().all(|k| tree.find(k)));
    assert_invariants(&tree);
}

#[test]
fn test_double_rotations() {
    let tree = AvlTree::from_iter([30, 10, 20]);
    assert_eq!(tree.root(), Some(20), "Left-right insertion should rotate twice.");
    assert_eq!(tree.height(), 2);
    assert_invariants(&tree);

    let tree = AvlTree::from_iter([10, 30, 20]);
    assert_eq!(tree.root(), Some(20), "Right-left insertion should rotate twice.");
    assert_eq!(tree.height(), 2);
    assert_invariants(&tree);
}

#[test]
fn test_insert_duplicates() {
    let mut tree = AvlTree::from_iter([5, 3, 8]);
    let before = tree.to_bytes().unwrap();

    assert!(!tree.insert(3), "Inserting an existing key should report no change.");
    assert_eq!(tree.len(), 3, "Duplicate keys shouldn't be counted.");
    assert_eq!(
        tree.to_bytes().unwrap(),
        before,
        "Duplicate insertion shouldn't change the shape of the tree."
    );
}

#[test]
fn test_sequential_inserts_stay_shallow() {
    let tree = AvlTree::from_iter(0..1024);
    assert_eq!(tree.len(), 1024);
    assert!(
        tree.height() <= 11,
        "Sorted insertion should stay balanced, but the height was {}.",
        tree.height()
    );
    assert_invariants(&tree);
    assert!(tree.iter().eq(0..1024), "In-order iteration should yield sorted keys.");
    assert_eq!(tree.first(), Some(0));
    assert_eq!(tree.last(), Some(1023));
}

#[test]
fn test_remove() {
    let mut tree = AvlTree::from_iter([50, 30, 70, 20, 40, 60, 80, 10]);

    assert!(tree.remove(10), "Removing a leaf should succeed.");
    assert!(!tree.find(10));
    assert_invariants(&tree);

    tree.insert(65);
    assert!(tree.remove(60), "Removing a node with one child should succeed.");
    assert!(tree.find(65), "The only child should take the removed node's place.");
    assert_invariants(&tree);

    assert!(tree.remove(50), "Removing the root with two children should succeed.");
    assert_eq!(
        tree.root(),
        Some(65),
        "The in-order successor should replace the removed root."
    );
    assert!(tree.iter().eq([20, 30, 40, 65, 70, 80]));
    assert_invariants(&tree);

    for key in [20, 30, 40, 65, 70, 80] {
        assert!(tree.remove(key));
        assert_invariants(&tree);
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_remove_rebalances() {
    let mut tree = AvlTree::from_iter([20, 10, 30, 25]);
    tree.remove(10);
    assert_eq!(
        tree.root(),
        Some(25),
        "Removing from the light side should trigger a right-left rotation."
    );
    assert_invariants(&tree);

    let mut tree = AvlTree::from_iter([20, 10, 30, 5, 15]);
    tree.remove(30);
    assert_eq!(
        tree.root(),
        Some(10),
        "A left child with balance 0 should be handled by a single rotation."
    );
    assert_invariants(&tree);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut tree = AvlTree::from_iter([4, 2, 6, 1, 3]);
    let before = tree.to_bytes().unwrap();

    assert!(!tree.remove(5), "Removing an absent key should report no change.");
    assert_eq!(tree.len(), 5);
    assert_eq!(
        tree.to_bytes().unwrap(),
        before,
        "Removing an absent key shouldn't change the encoded tree."
    );

    let mut empty = AvlTree::new();
    assert!(!empty.remove(1));
    assert!(empty.is_empty());
}

#[test]
fn test_encode_format() {
    let tree = AvlTree::from_iter([10, 20, 30]);
    assert_eq!(
        tree.to_bytes().unwrap(),
        keys_to_bytes(&[20, 10, -1, -1, 30, -1, -1]),
        "Nodes should be written in pre-order with -1 for absent children."
    );

    assert_eq!(
        AvlTree::new().to_bytes().unwrap(),
        keys_to_bytes(&[-1]),
        "An empty tree is a single null marker."
    );
}

#[test]
fn test_round_trip() {
    let tree = AvlTree::from_iter((-50..50).map(|k| k * 7).filter(|k| *k != -1));
    let decoded = AvlTree::from_bytes(&tree.to_bytes().unwrap()).unwrap();

    assert_eq!(decoded, tree);
    assert_eq!(decoded.height(), tree.height(), "Decoding should preserve the shape.");
    assert_invariants(&decoded);
    for key in -400..400 {
        assert_eq!(decoded.find(key), tree.find(key));
    }
}

#[test]
fn test_reserved_key() {
    let tree = AvlTree::from_iter([3, -1, 7]);
    let mut buf = Vec::new();

    assert!(
        matches!(tree.encode(&mut buf), Err(EncodeError::ReservedKey(_))),
        "A key equal to the null marker can't be encoded unambiguously."
    );
    assert!(buf.is_empty(), "Nothing should be written when encoding is rejected.");
}

#[test]
fn test_decode_errors() {
    assert!(matches!(
        AvlTree::from_bytes(&keys_to_bytes(&[20, 10])),
        Err(DecodeError::Truncated(_))
    ));

    assert!(
        matches!(
            AvlTree::from_bytes(&keys_to_bytes(&[20, 30, -1, -1, -1])),
            Err(DecodeError::MalformedTree(_))
        ),
        "A left child larger than its parent should be rejected."
    );

    assert!(
        matches!(
            AvlTree::from_bytes(&keys_to_bytes(&[1, -1, 2, -1, 3, -1, -1])),
            Err(DecodeError::MalformedTree(_))
        ),
        "A chain of right children isn't balanced and should be rejected."
    );

    assert!(matches!(
        AvlTree::from_bytes(&keys_to_bytes(&[5, -1, -1, 9])),
        Err(DecodeError::TrailingBytes(_))
    ));
}

#[test]
fn test_restore_replaces_contents() {
    let mut tree = AvlTree::from_iter([1, 2, 3]);
    let other = AvlTree::from_iter([100, 200]);

    tree.restore(&mut other.to_bytes().unwrap().as_slice()).unwrap();
    assert_eq!(tree, other, "Restoring should replace, not merge.");

    let truncated = keys_to_bytes(&[100, 50]);
    assert!(tree.restore(&mut truncated.as_slice()).is_err());
    assert!(tree.is_empty(), "A failed restore should leave the tree empty.");
}

#[cfg(all(feature = "fs", target_os = "linux"))]
#[test]
fn test_save_and_load() {
    use crate::persist::LoadError;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.bin");

    let tree = AvlTree::from_iter([8, 4, 12, 2, 6, 10, 14]);
    tree.save(&path).unwrap();

    let mut loaded = AvlTree::from_iter([99]);
    loaded.load(&path).unwrap();
    assert_eq!(loaded, tree);
    assert_eq!(loaded.root(), Some(8));

    let mut untouched = AvlTree::from_iter([99]);
    assert!(matches!(
        untouched.load(dir.path().join("missing.bin")),
        Err(LoadError::Open(_))
    ));
    assert!(untouched.find(99), "A file that can't be opened shouldn't clear the tree.");
}

#[test]
fn test_formatting() {
    let tree = AvlTree::from_iter([2, 1, 3]);
    assert_eq!(tree.to_string(), "{1, 2, 3}");

    let debug = format!("{tree:?}");
    assert!(debug.contains("(2 h2)"), "Debug output should show the root and its height.");
    assert!(debug.contains("┌    (1 h1)"), "Left children should be drawn above.");
    assert!(debug.contains("└    (3 h1)"), "Right children should be drawn below.");
}
