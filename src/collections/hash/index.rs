/// Maps `key` onto one of `cap` buckets by the magnitude of the key. `i32::MIN` has no positive
/// counterpart, so the magnitude is taken as unsigned.
///
/// `cap` must be non-zero, which every table in this module guarantees from construction.
pub(crate) const fn bucket_index(key: i32, cap: usize) -> usize {
    key.unsigned_abs() as usize % cap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_index() {
        assert_eq!(bucket_index(7, 5), 2);
        assert_eq!(bucket_index(-7, 5), 2, "Negative keys should hash by magnitude.");
        assert_eq!(
            bucket_index(i32::MIN, 10),
            8,
            "The most negative key should hash without overflowing."
        );
        assert_eq!(bucket_index(i32::MAX, 1), 0);
    }
}
