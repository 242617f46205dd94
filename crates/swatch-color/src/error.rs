use std::fmt;

/// A parse error from the strict CSS color / gradient parsers.
///
/// The permissive entry points ([`crate::string_to_rgba`], [`crate::normalize`],
/// [`crate::Paint::from_css`]) never surface this type; they log it at debug
/// level and fall back to opaque black.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// Byte offset into the input where the error was detected.
    pub pos: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, pos: usize) -> Self {
        Self { message: msg.into(), pos }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "css parse error at byte {}: {}", self.pos, self.message)
    }
}

impl std::error::Error for ParseError {}
