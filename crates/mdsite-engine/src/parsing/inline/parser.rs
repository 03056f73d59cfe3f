use crate::parsing::error::ParseError;

use super::{
    cursor::Cursor,
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::{Span, SpanKind},
};

/// Tokenizes inline markdown into an ordered sequence of [`Span`]s.
///
/// Runs one pass per construct over the growing sequence. Each pass only
/// splits `Plain` spans; spans produced by earlier passes pass through.
///
/// # Pass Order
/// 1. `**` bold
/// 2. `_` italic
/// 3. `` ` `` code
/// 4. `![alt](url)` image
/// 5. `[text](url)` link
///
/// Images must be split before links: link syntax is a suffix of image
/// syntax, so the reverse order would leave a stray `!` and a bogus link.
///
/// # Errors
/// [`ParseError::UnterminatedDelimiter`] when a `**`, `_` or `` ` `` has no
/// closing partner. This fails the whole conversion.
pub fn tokenize(text: &str) -> Result<Vec<Span>, ParseError> {
    let spans = vec![Span::plain(text)];
    let spans = split_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    let spans = split_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)?;
    let spans = split_delimiter(spans, CodeSpan::DELIMITER, SpanKind::Code)?;
    let spans = split_images(spans)?;
    split_links(spans)
}

/// Splits every `Plain` span on pairs of `delimiter`, wrapping the enclosed
/// text as `kind`.
///
/// Empty pieces are dropped, so `****` vanishes entirely. A span that does
/// not contain the delimiter is kept as-is.
pub fn split_delimiter(
    spans: Vec<Span>,
    delimiter: &'static str,
    kind: SpanKind,
) -> Result<Vec<Span>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let text = match span {
            Span::Plain(text) if text.contains(delimiter) => text,
            other => {
                out.push(other);
                continue;
            }
        };

        let mut rest = text.as_str();
        while let Some(open) = rest.find(delimiter) {
            push_plain(&mut out, &rest[..open]);

            let inner = &rest[open + delimiter.len()..];
            let close = inner
                .find(delimiter)
                .ok_or_else(|| ParseError::UnterminatedDelimiter {
                    delimiter,
                    text: text.clone(),
                })?;
            if close > 0 {
                out.push(Span::new(kind, &inner[..close], None)?);
            }
            rest = &inner[close + delimiter.len()..];
        }
        push_plain(&mut out, rest);
    }

    Ok(out)
}

/// Splits `![alt](url)` out of every `Plain` span.
pub fn split_images(spans: Vec<Span>) -> Result<Vec<Span>, ParseError> {
    split_bracketed(spans, SpanKind::Image, try_parse_image)
}

/// Splits `[text](url)` out of every `Plain` span, skipping any `[` preceded
/// by `!`.
pub fn split_links(spans: Vec<Span>) -> Result<Vec<Span>, ParseError> {
    split_bracketed(spans, SpanKind::Link, try_parse_link)
}

/// A matched `[label](url)` construct, borrowed from the scanned text.
struct Bracketed<'a> {
    /// Byte offset of the first syntax byte (`!` or `[`).
    start: usize,
    label: &'a str,
    url: &'a str,
}

/// Scans each `Plain` span left to right, consuming matches in order.
///
/// Consumed byte ranges never overlap, so repeated identical syntax is
/// consumed once per occurrence.
fn split_bracketed(
    spans: Vec<Span>,
    kind: SpanKind,
    try_parse: for<'a> fn(&mut Cursor<'a>) -> Option<Bracketed<'a>>,
) -> Result<Vec<Span>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let Span::Plain(text) = span else {
            out.push(span);
            continue;
        };

        let mut found = Vec::new();
        let mut cur = Cursor::new(&text);
        let mut text_start = 0;
        while !cur.eof() {
            if let Some(m) = try_parse(&mut cur) {
                if m.start > text_start {
                    found.push(Span::plain(&text[text_start..m.start]));
                }
                found.push(Span::new(kind, m.label, Some(m.url.to_string()))?);
                text_start = cur.pos();
                continue;
            }
            cur.bump();
        }

        if found.is_empty() {
            out.push(Span::Plain(text));
            continue;
        }
        push_plain(&mut found, &text[text_start..]);
        out.extend(found);
    }

    Ok(out)
}

fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<Bracketed<'a>> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }
    parse_bracket_tail(cur, Image::OPEN.len())
}

fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<Bracketed<'a>> {
    if !cur.starts_with(Link::OPEN) || cur.prev() == Some(Image::BANG) {
        return None;
    }
    parse_bracket_tail(cur, Link::OPEN.len())
}

/// Parses `label](url)` after an opener of `open_len` bytes.
///
/// The label ends at the first `]`, which must be followed directly by `(`;
/// the url ends at the first `)`. Neither may contain a line break. The
/// cursor only advances on success.
fn parse_bracket_tail<'a>(cur: &mut Cursor<'a>, open_len: usize) -> Option<Bracketed<'a>> {
    let start = cur.pos();
    let rest = cur.rest();

    let label_region = &rest[open_len..];
    let label_end = label_region.find(Link::LABEL_CLOSE)?;
    let label = &label_region[..label_end];

    let after_label = &label_region[label_end + Link::LABEL_CLOSE.len_utf8()..];
    let url_region = after_label.strip_prefix(Link::URL_OPEN)?;
    let url_end = url_region.find(Link::URL_CLOSE)?;
    let url = &url_region[..url_end];

    if label.contains('\n') || url.contains('\n') {
        return None;
    }

    let consumed = rest.len() - url_region.len() + url_end + Link::URL_CLOSE.len_utf8();
    cur.bump_n(consumed);

    Some(Bracketed { start, label, url })
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::plain(text));
    }
}
