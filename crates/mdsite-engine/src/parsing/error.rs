use super::inline::SpanKind;

/// Errors raised while converting a markdown document to markup.
///
/// Every variant is fatal for the document being converted: no partial
/// output is produced once one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A link or image span was built without a url.
    #[error("{kind} span requires a url: {text:?}")]
    MissingUrl { kind: SpanKind, text: String },

    /// An inline delimiter was opened but never closed.
    #[error("Unterminated delimiter `{delimiter}` in {text:?}")]
    UnterminatedDelimiter {
        delimiter: &'static str,
        text: String,
    },

    /// A span kind name did not match any known variant.
    #[error("Invalid span variant: {0}")]
    InvalidSpanVariant(String),
}
