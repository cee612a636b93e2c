//! Parse errors.
//!
//! Every malformed construct is reported as a [`ParseError`]; the parser
//! never panics on bad input. The first error aborts the whole parse.

use strum_macros::IntoStaticStr;
use thiserror::Error;

/// A parse failure and the byte offset at which it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at byte {offset}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Cursor position when the failure was detected.
    pub offset: usize,
}

impl ParseError {
    /// Create an error of `kind` at `offset`.
    #[must_use]
    pub const fn new(kind: ParseErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// Stable name of the error kind, e.g. `"MismatchedClosingTag"`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        (&self.kind).into()
    }
}

/// The kinds of failure the parser can report.
#[derive(Debug, Clone, PartialEq, Eq, Error, IntoStaticStr)]
pub enum ParseErrorKind {
    /// A byte was requested past the end of the buffer.
    #[error("unexpected end of input")]
    EndOfInput,

    /// An element did not start with `<`.
    #[error("expected '<' to open an element")]
    MissingOpeningAngleBracket,

    /// A start or end tag was not closed with `>`.
    #[error("expected '>' to close the tag")]
    MissingClosingAngleBracket,

    /// The children of an element were not followed by `<`.
    #[error("expected '<' to start a closing tag")]
    MissingClosingTagStart,

    /// A closing tag's `<` was not followed by `/`.
    #[error("expected '/' to start a closing tag")]
    MissingClosingTagSlash,

    /// The closing tag name differs (byte-for-byte) from the opening one.
    #[error("closing tag </{found}> does not match <{expected}>")]
    MismatchedClosingTag {
        /// Name of the element being closed.
        expected: String,
        /// Name found in the closing tag.
        found: String,
    },

    /// Input ended while an element was still open.
    #[error("input ended inside <{tag}> before its closing tag")]
    UnterminatedElement {
        /// Name of the innermost open element.
        tag: String,
    },

    /// A closing tag appeared at the top level with no element to close.
    #[error("closing tag </{found}> has no matching opening tag")]
    UnmatchedClosingTag {
        /// Name found in the stray closing tag.
        found: String,
    },

    /// An attribute name was not followed by `=`.
    #[error("attribute '{name}' is not followed by '='")]
    MalformedAttributeAssignment {
        /// The attribute name that was read.
        name: String,
    },

    /// An attribute value did not start with an accepted quote byte.
    #[error("attribute value must be quoted")]
    MalformedAttributeValue,

    /// Input ended before an attribute value's closing quote.
    #[error("input ended inside a quoted attribute value")]
    UnterminatedAttributeValue,

    /// Elements were nested deeper than the configured limit.
    #[error("elements nested deeper than {limit} levels")]
    MaxNestingDepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },

    /// An element had an empty tag name and empty names are rejected.
    #[error("element has an empty tag name")]
    EmptyTagName,

    /// An attribute had an empty name and empty names are rejected.
    #[error("attribute has an empty name")]
    EmptyAttributeName,
}
