/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quoted(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips one `>` and any whitespace after it.
    ///
    /// Nested quotes are not supported, so `>> text` keeps its second `>`.
    pub fn strip_prefix(line: &str) -> &str {
        line.strip_prefix(Self::PREFIX)
            .unwrap_or(line)
            .trim_start()
    }
}
