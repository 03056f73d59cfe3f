/// Code span inline type with owned delimiter constant.
///
/// Code spans are split after bold and italic, so `**` and `_` inside
/// backticks have already been consumed by the time this delimiter is seen.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const DELIMITER: &'static str = "`";
}
