use std::sync::LazyLock;

use regex::Regex;

static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("Invalid block separator regex"));

/// Splits a document into blocks on runs of two or more newlines.
///
/// Each block is trimmed and empty blocks are dropped, so a blank document
/// yields no blocks. A line holding only spaces does not separate blocks.
///
/// Expects `\n` line endings; `document_to_markup` normalizes CRLF first.
pub fn segment(markdown: &str) -> Vec<&str> {
    BLOCK_SEPARATOR
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
