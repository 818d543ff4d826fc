//! Parse error types.

use std::fmt;

/// A parse error tied to a specific line of a bill file.
///
/// The first malformed line aborts the whole parse; this error carries the
/// line's 1-based position and its original text so the failure can be
/// reported in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// 1-based line number where the error occurred.
    pub line: usize,
    /// The offending line's text, trimmed of surrounding whitespace.
    pub text: String,
}

impl ParseError {
    /// Create a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, text: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
        }
    }

    /// Get the error message without location information.
    #[must_use]
    pub fn message(&self) -> String {
        format!("{}", self.kind)
    }

    /// Get a short label for the error.
    #[must_use]
    pub const fn label(&self) -> &str {
        match &self.kind {
            ParseErrorKind::MissingPriceSeparator => "missing '],' separator",
            ParseErrorKind::MissingParticipantList => "missing participant list",
            ParseErrorKind::EmptyParticipants => "empty participant list",
            ParseErrorKind::InvalidPrice(_) => "invalid price",
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ('{}')", self.kind, self.text)
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Item line has no `],` separating participants from the price.
    MissingPriceSeparator,
    /// Item line has no `[` opening the participant list.
    MissingParticipantList,
    /// The participant list is empty.
    EmptyParticipants,
    /// The price (or directive value) is not a valid decimal.
    InvalidPrice(String),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPriceSeparator => {
                write!(f, "expected '],' between participants and price")
            }
            Self::MissingParticipantList => {
                write!(f, "expected '[' before the participant list")
            }
            Self::EmptyParticipants => write!(f, "participant list is empty"),
            Self::InvalidPrice(text) => write!(f, "invalid price '{text}'"),
        }
    }
}
