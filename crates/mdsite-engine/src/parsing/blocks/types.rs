/// The kind of a block, decided from its text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// A paragraph block (default when no other kind matches).
    Paragraph,
    /// An ATX heading.
    Heading {
        /// Number of leading `#` characters (1-6).
        level: u8,
    },
    /// A fenced code block. Raw zone: no inline parsing inside.
    Code,
    /// A single-level blockquote.
    Quote,
    /// A `- ` list.
    UnorderedList,
    /// A `1. ` list numbered consecutively from 1.
    OrderedList,
}
