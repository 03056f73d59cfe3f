use std::sync::LazyLock;

use regex::Regex;

/// Unordered list item type: `- item`.
pub struct UnorderedItem;

impl UnorderedItem {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    pub fn strip_marker(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// Ordered list item type: `1. item`.
///
/// Numbering must start at 1 and step by exactly 1 for a block to count as
/// an ordered list.
pub struct OrderedItem;

static ORDINAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("Invalid ordinal regex"));

impl OrderedItem {
    /// Whether `line` starts with the marker for the `ordinal`-th item.
    pub fn is_item(line: &str, ordinal: usize) -> bool {
        line.strip_prefix(ordinal.to_string().as_str())
            .is_some_and(|rest| rest.starts_with(". "))
    }

    /// Strips any `N.` marker and the whitespace after it.
    pub fn strip_marker(line: &str) -> &str {
        match ORDINAL_MARKER.find(line) {
            Some(m) => &line[m.end()..],
            None => line,
        }
    }
}
