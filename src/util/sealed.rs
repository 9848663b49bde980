/// Prevents downstream crates from implementing marker traits that the crate relies on being
/// exhaustive, such as the access modes in [`fs`](crate::fs).
pub trait Sealed {}
