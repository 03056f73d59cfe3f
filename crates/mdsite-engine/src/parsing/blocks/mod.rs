//! # Block Parsing
//!
//! Turns a document into a sequence of block subtrees in three steps.
//!
//! ## Phases
//!
//! 1. **Segmentation** (`segment`): split on blank-line runs into trimmed blocks
//! 2. **Classification** (`classify`): decide a `BlockKind` from the block text
//! 3. **Rendering** (`render`): build the markup subtree for the kind
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned syntax (Heading, CodeFence, BlockQuote, list items)
//! - **`segment`**, **`classify`**, **`render`**: the three phases
//!
//! ## Key Invariants
//!
//! - Blocks never nest: a list cannot hold a sub-list, a quote cannot hold code
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod render;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use render::render;
pub use segment::segment;
pub use types::BlockKind;
