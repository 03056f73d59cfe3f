//! # Parsing
//!
//! Markdown text to markup tree, and markup tree to HTML.
//!
//! ## Pipeline
//!
//! `segment` -> `classify` -> `render` per block, each block's text going
//! through `inline::tokenize`. The rendered blocks are wrapped in one `div`.
//!
//! ## Modules
//!
//! - **`blocks`**: segmentation, classification and block rendering
//! - **`inline`**: `Span` model and the inline tokenizer
//! - **`markup`**: `MarkupNode` tree and its serialization
//! - **`snapshot`**: stable text outlines and tree invariants for tests
//! - **`error`**: `ParseError`

pub mod blocks;
pub mod error;
pub mod inline;
pub mod markup;
pub mod snapshot;

pub use error::ParseError;
pub use markup::{Attributes, MarkupNode, serialize};

use blocks::{classify, render, segment};

/// Converts a whole document to a `div` holding one subtree per block.
///
/// CRLF line endings are normalized to `\n` first. Any block failing to
/// render fails the document.
pub fn document_to_markup(markdown: &str) -> Result<MarkupNode, ParseError> {
    let markdown = markdown.replace("\r\n", "\n");
    let children = segment(&markdown)
        .into_iter()
        .map(|block| render(block, classify(block)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MarkupNode::container("div", children))
}

/// Converts a whole document straight to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String, ParseError> {
    Ok(serialize(&document_to_markup(markdown)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_empty_div() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
        assert_eq!(markdown_to_html("\n\n \n").unwrap(), "<div></div>");
    }

    #[test]
    fn blocks_render_in_document_order() {
        let html = markdown_to_html("# T\n\nHello **world**").unwrap();
        assert_eq!(html, "<div><h1>T</h1><p>Hello <b>world</b></p></div>");
    }

    #[test]
    fn one_bad_block_fails_the_document() {
        let err = document_to_markup("# Fine\n\nnot `fine").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnterminatedDelimiter {
                delimiter: "`",
                text: "not `fine".to_string()
            }
        );
    }

    #[test]
    fn crlf_line_endings_separate_blocks() {
        assert_eq!(
            markdown_to_html("# T\r\n\r\nline one\r\nline two\r\n\r\n- a\r\n- b\r\n").unwrap(),
            "<div><h1>T</h1><p>line one\nline two</p><ul><li>a</li><li>b</li></ul></div>"
        );
        assert_eq!(
            markdown_to_html("```\r\ncode\r\n```").unwrap(),
            "<div><pre><code>code</code></pre></div>"
        );
    }

    #[test]
    fn root_children_match_block_count() {
        let root = document_to_markup("a\n\n- b\n\n> c").unwrap();
        let tags: Vec<_> = root.children().iter().filter_map(MarkupNode::tag).collect();
        assert_eq!(tags, vec!["p", "ul", "blockquote"]);
    }
}
