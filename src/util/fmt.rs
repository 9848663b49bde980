use std::fmt::{self, Debug, Formatter};

/// Wraps a preformatted string so that it is written verbatim by [`Debug`], without the quotes
/// and escaping that [`String`]'s own implementation adds.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Prefixes every line of `text` with `prefix`, used to draw nested structures as indented
/// blocks.
pub fn indent_lines(prefix: &str, text: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
