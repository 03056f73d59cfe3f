use std::{fmt, str::FromStr};

use crate::parsing::{error::ParseError, markup::MarkupNode};

/// The variant tag of a [`Span`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(ParseError::InvalidSpanVariant(other.to_string())),
        }
    }
}

/// One inline-formatted run of text.
///
/// Links and images own their url; the other variants have none.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { text: String, url: String },
    /// `alt` is the display text of the image.
    Image { alt: String, url: String },
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Span::Bold(text.into())
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Span::Italic(text.into())
    }

    pub fn code(text: impl Into<String>) -> Self {
        Span::Code(text.into())
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Span::Image {
            alt: alt.into(),
            url: url.into(),
        }
    }

    /// Builds a span of any kind.
    ///
    /// Links and images fail with [`ParseError::MissingUrl`] when `url` is
    /// `None`. The url is ignored for every other kind.
    pub fn new(
        kind: SpanKind,
        text: impl Into<String>,
        url: Option<String>,
    ) -> Result<Self, ParseError> {
        let text = text.into();
        let span = match kind {
            SpanKind::Plain => Span::Plain(text),
            SpanKind::Bold => Span::Bold(text),
            SpanKind::Italic => Span::Italic(text),
            SpanKind::Code => Span::Code(text),
            SpanKind::Link | SpanKind::Image => {
                let Some(url) = url else {
                    return Err(ParseError::MissingUrl { kind, text });
                };
                if kind == SpanKind::Link {
                    Span::Link { text, url }
                } else {
                    Span::Image { alt: text, url }
                }
            }
        };
        Ok(span)
    }

    pub fn kind(&self) -> SpanKind {
        match self {
            Span::Plain(_) => SpanKind::Plain,
            Span::Bold(_) => SpanKind::Bold,
            Span::Italic(_) => SpanKind::Italic,
            Span::Code(_) => SpanKind::Code,
            Span::Link { .. } => SpanKind::Link,
            Span::Image { .. } => SpanKind::Image,
        }
    }

    /// Display text; alt text for images.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { text, .. } => text,
            Span::Image { alt, .. } => alt,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Span::Link { url, .. } | Span::Image { url, .. } => Some(url.as_str()),
            _ => None,
        }
    }

    /// Converts this span into its leaf markup node.
    pub fn to_markup_node(&self) -> MarkupNode {
        match self {
            Span::Plain(text) => MarkupNode::text(text.as_str()),
            Span::Bold(text) => MarkupNode::leaf("b", text.as_str()),
            Span::Italic(text) => MarkupNode::leaf("i", text.as_str()),
            Span::Code(text) => MarkupNode::leaf("code", text.as_str()),
            Span::Link { text, url } => {
                MarkupNode::leaf("a", text.as_str()).with_attribute("href", url.as_str())
            }
            Span::Image { alt, url } => MarkupNode::leaf("img", "")
                .with_attribute("src", url.as_str())
                .with_attribute("alt", alt.as_str()),
        }
    }
}
