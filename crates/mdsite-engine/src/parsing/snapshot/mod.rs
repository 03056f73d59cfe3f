//! # Snapshot Testing Support
//!
//! Utilities for testing the conversion pipeline via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a markup tree as an indented outline, one node
//!   per line, for `insta` snapshots that stay readable when a block changes
//! - **`invariants`**: Runtime checks for tree shape (one `div` root, known
//!   block tags, leaves only where inline content belongs)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
