/// Inline link `[text](url)`.
///
/// The label ends at the first `]` and the url at the first `)`; neither may
/// span a line break.
pub struct Link;

impl Link {
    pub const OPEN: &'static [u8; 1] = b"[";
    pub const LABEL_CLOSE: char = ']';
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
}

/// Inline image `![alt](url)`: a link prefixed with `!`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
    pub const OPEN: &'static [u8; 2] = b"![";
}
