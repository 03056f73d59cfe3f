use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedItem, UnorderedItem},
    types::BlockKind,
};

/// Decides the kind of a single block. First match wins:
///
/// 1. blank block: paragraph
/// 2. heading line at the start
/// 3. fenced on both ends: code
/// 4. every non-blank line quoted: quote
/// 5. every non-blank line a `- ` item: unordered list
/// 6. the i-th non-blank line starts with `i. `: ordered list
/// 7. otherwise paragraph
pub fn classify(block: &str) -> BlockKind {
    if block.trim().is_empty() {
        return BlockKind::Paragraph;
    }

    if let Some(level) = Heading::level(block) {
        return BlockKind::Heading { level };
    }

    if CodeFence::is_fenced(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = non_blank_lines(block).collect();

    if lines.iter().all(|line| BlockQuote::is_quoted(line)) {
        return BlockKind::Quote;
    }

    if lines.iter().all(|line| UnorderedItem::is_item(line)) {
        return BlockKind::UnorderedList;
    }

    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| OrderedItem::is_item(line, i + 1))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Lines of `block` that are not empty after trimming.
pub(crate) fn non_blank_lines(block: &str) -> impl Iterator<Item = &str> {
    block.lines().filter(|line| !line.trim().is_empty())
}
