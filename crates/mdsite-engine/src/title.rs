//! Page title extraction.

/// Errors raised while looking for a document title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("No h1 header found in markdown")]
    NoTitleFound,
}

/// Returns the text of the first level-1 heading.
///
/// Leading whitespace before the `#` is tolerated here, unlike in block
/// classification. `## Sub` is not a title.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .ok_or(TitleError::NoTitleFound)
}
