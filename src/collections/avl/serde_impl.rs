use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AvlTree;

/// The self-describing representation: the sorted key set. Unlike the binary format this can
/// represent the key `-1`.
#[derive(Serialize, Deserialize)]
struct AvlTreeRepr {
    keys: Vec<i32>,
}

impl Serialize for AvlTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AvlTreeRepr {
            keys: self.iter().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AvlTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = AvlTreeRepr::deserialize(deserializer)?;
        Ok(repr.keys.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let tree = AvlTree::from_iter([5, -1, 3, 9]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, r#"{"keys":[-1,3,5,9]}"#);

        let decoded: AvlTree = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, tree);
    }
}
