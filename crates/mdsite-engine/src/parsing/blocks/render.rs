use crate::parsing::{error::ParseError, inline::text_to_children, markup::MarkupNode};

use super::{
    classify::non_blank_lines,
    kinds::{BlockQuote, CodeFence, Heading, OrderedItem, UnorderedItem},
    types::BlockKind,
};

/// Renders one classified block to its markup subtree.
///
/// Inline parsing failures propagate; code blocks never fail.
pub fn render(block: &str, kind: BlockKind) -> Result<MarkupNode, ParseError> {
    match kind {
        BlockKind::Paragraph => Ok(MarkupNode::container("p", text_to_children(block)?)),
        BlockKind::Heading { level } => Ok(MarkupNode::container(
            format!("h{level}"),
            text_to_children(Heading::strip(block))?,
        )),
        BlockKind::Code => Ok(MarkupNode::container(
            "pre",
            vec![MarkupNode::leaf("code", CodeFence::body(block))],
        )),
        BlockKind::Quote => {
            let text = block
                .split('\n')
                .map(BlockQuote::strip_prefix)
                .collect::<Vec<_>>()
                .join("\n");
            Ok(MarkupNode::container("blockquote", text_to_children(&text)?))
        }
        BlockKind::UnorderedList => render_list(block, "ul", UnorderedItem::strip_marker),
        BlockKind::OrderedList => render_list(block, "ol", OrderedItem::strip_marker),
    }
}

/// One `li` per non-blank line; a line without a marker keeps its text.
fn render_list(
    block: &str,
    tag: &str,
    strip_marker: fn(&str) -> &str,
) -> Result<MarkupNode, ParseError> {
    let items = non_blank_lines(block)
        .map(|line| Ok(MarkupNode::container("li", text_to_children(strip_marker(line))?)))
        .collect::<Result<Vec<_>, ParseError>>()?;
    Ok(MarkupNode::container(tag, items))
}
