//! Strict parser for a restricted HTML dialect.
//!
//! # Scope
//!
//! This crate implements a one-pass recursive-descent parser:
//! - **Byte cursor** ([`Cursor`]) - bounded peek/consume primitives, the only
//!   code that indexes the input
//! - **Scanners** - whitespace, names, free text, quoted values
//! - **Parser** ([`HTMLParser`], [`parse`]) - attributes, elements, node
//!   lists and the top-level entry
//!
//! The accepted grammar is small: every element has an explicit closing tag
//! with exactly the same (case-sensitive) name, attribute values are quoted,
//! and anything malformed fails the whole document with a [`ParseError`].
//!
//! # Not Supported
//!
//! - Character references (`&amp;` stays as four bytes of text)
//! - Comments, DOCTYPE, CDATA
//! - Void and self-closing elements
//! - Raw-text elements (script, style)
//! - Error recovery and implied tags

/// Byte cursor over the input.
pub mod cursor;
/// Parse errors.
pub mod error;
/// Parser configuration.
pub mod options;
/// Element, attribute and text parsing.
pub mod parser;
mod scanner;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use options::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH, ParserOptions};
pub use parser::{HTMLParser, IssueKind, ParseIssue, SYNTHETIC_ROOT_TAG, parse, parse_with_options};
pub use scanner::{is_name_byte, is_whitespace_byte};
pub use wren_dom::{AttributesMap, ElementData, Node};
