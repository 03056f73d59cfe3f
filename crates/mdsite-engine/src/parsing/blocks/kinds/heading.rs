use std::sync::LazyLock;

use regex::Regex;

/// ATX heading type with owned syntax.
///
/// A heading line is 1-6 `#` characters followed by a mandatory space.
pub struct Heading;

static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6}) ").expect("Invalid heading regex"));

impl Heading {
    pub const PREFIX: char = '#';

    /// Returns the heading level of `line`, or `None` if it is not a heading.
    ///
    /// A seventh `#` or a missing space disqualifies the line.
    pub fn level(line: &str) -> Option<u8> {
        let hashes = HEADING_LINE.captures(line)?.get(1)?;
        u8::try_from(hashes.as_str().len()).ok()
    }

    /// Strips the leading `#` run and exactly one following space.
    pub fn strip(block: &str) -> &str {
        let rest = block.trim_start_matches(Self::PREFIX);
        rest.strip_prefix(' ').unwrap_or(rest)
    }
}
