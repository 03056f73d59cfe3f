//! # Inline Parsing
//!
//! Pass-based inline tokenizing over the text of a single block.
//!
//! ## Architecture
//!
//! A block's text starts as one `Plain` span. Each pass splits the remaining
//! `Plain` spans on one construct and leaves every other span untouched:
//! bold, italic, code, then images, then links.
//!
//! ## Modules
//!
//! - **`types`**: `Span` enum (Plain, Bold, Italic, Code, Link, Image) and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning of image and link syntax
//! - **`parser`**: `tokenize()` main entry point with the `split_*` passes
//!
//! ## Fatal Delimiters
//!
//! An unmatched `**`, `_` or `` ` `` is an error, not plain text: the whole
//! document conversion fails with `ParseError::UnterminatedDelimiter`.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{Span, SpanKind};

use super::{error::ParseError, markup::MarkupNode};

/// Tokenizes `text` and converts every span to its leaf markup node.
pub fn text_to_children(text: &str) -> Result<Vec<MarkupNode>, ParseError> {
    Ok(tokenize(text)?.iter().map(Span::to_markup_node).collect())
}
