//! # Block Kinds
//!
//! Block-specific types that own their syntax, so the classifier and the
//! renderer never hardcode `#`, `>` or list markers.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{OrderedItem, UnorderedItem};
