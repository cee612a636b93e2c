//! Recursive-descent parser for the restricted dialect.
//!
//! Grammar, informally:
//!
//! ```text
//! document   := node-list
//! node-list  := (ws* (element | text))* ws*      stops before "</" or at end
//! element    := "<" name attributes ">" node-list "</" name ">"
//! attributes := (ws* name "=" quoted)* ws*
//! text       := [^<]*
//! ```
//!
//! The cursor position and the recursion depth are the only parser state.

use std::str;

use log::{debug, trace};
use strum_macros::Display;
use wren_dom::{AttributesMap, Node};

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;

/// Tag of the synthetic root wrapped around multiple top-level nodes.
pub const SYNTHETIC_ROOT_TAG: &str = "html";

const LOG_TARGET: &str = "wren::html";

/// Kinds of non-fatal oddities noticed while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IssueKind {
    /// An element's tag name was empty, as in `<></>`.
    EmptyTagName,
    /// An attribute name was empty, as in `<p ="x">`.
    EmptyAttributeName,
    /// An attribute name appeared twice on one element; the last value won.
    DuplicateAttribute,
    /// Text or an attribute value was not valid UTF-8 and was decoded lossily.
    InvalidUtf8,
}

/// Which kind of name `parse_name` is reading.
#[derive(Clone, Copy)]
enum NameRole {
    Tag,
    Attribute,
}

impl NameRole {
    const fn error(self) -> ParseErrorKind {
        match self {
            Self::Tag => ParseErrorKind::EmptyTagName,
            Self::Attribute => ParseErrorKind::EmptyAttributeName,
        }
    }

    const fn issue(self) -> IssueKind {
        match self {
            Self::Tag => IssueKind::EmptyTagName,
            Self::Attribute => IssueKind::EmptyAttributeName,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::Tag => "element with an empty tag name",
            Self::Attribute => "attribute with an empty name",
        }
    }
}

/// A non-fatal observation recorded during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// What kind of oddity this is.
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// Byte offset in the input where it was noticed.
    pub offset: usize,
}

/// Parses one byte buffer into a [`Node`] tree.
///
/// A parser is single-use: [`run`](Self::run) consumes it.
pub struct HTMLParser<'a> {
    /// The input and our position in it.
    cursor: Cursor<'a>,

    /// Grammar knobs.
    options: ParserOptions,

    /// Number of elements currently open.
    depth: usize,

    /// Parse issues (warnings) encountered during parsing.
    issues: Vec<ParseIssue>,
}

/// Parse `input` with the baseline options.
///
/// Returns the single top-level node, or a synthetic `html` element wrapping
/// the top-level nodes when there are zero or several of them.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; there is no recovery.
pub fn parse(input: &[u8]) -> Result<Node, ParseError> {
    HTMLParser::new(input).run()
}

/// Parse `input` with explicit options.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; there is no recovery.
pub fn parse_with_options(input: &[u8], options: &ParserOptions) -> Result<Node, ParseError> {
    HTMLParser::new(input).with_options(*options).run()
}

impl<'a> HTMLParser<'a> {
    /// Create a parser over `input` with the baseline options.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(input),
            options: ParserOptions::default(),
            depth: 0,
            issues: Vec::new(),
        }
    }

    /// Replace the parser's options.
    #[must_use]
    pub const fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the parser and return the root node.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn run(mut self) -> Result<Node, ParseError> {
        self.parse_document()
    }

    /// Run the parser and return the result together with any parse issues.
    ///
    /// Issues recorded before a failure are returned as well.
    pub fn run_with_issues(mut self) -> (Result<Node, ParseError>, Vec<ParseIssue>) {
        let result = self.parse_document();
        (result, self.issues)
    }

    /// Record a parse warning (for suspicious but accepted input).
    fn parse_warning(&mut self, kind: IssueKind, message: String, offset: usize) {
        debug!(target: LOG_TARGET, "{message} at byte {offset}");
        self.issues.push(ParseIssue {
            kind,
            message,
            offset,
        });
    }

    // =========================================================================
    // Top level
    // =========================================================================

    fn parse_document(&mut self) -> Result<Node, ParseError> {
        debug!(target: LOG_TARGET, "parsing {} bytes", self.cursor.remaining());
        let mut nodes = self.parse_nodes()?;

        // The node list only stops early in front of "</", which at the top
        // level has nothing to close.
        if !self.cursor.at_end() {
            let offset = self.cursor.position();
            let _ = self.cursor.consume_byte()?;
            let _ = self.cursor.consume_byte()?;
            let found = self.cursor.scan_name_token();
            return Err(ParseError::new(
                ParseErrorKind::UnmatchedClosingTag { found },
                offset,
            ));
        }

        if nodes.len() == 1
            && let Some(root) = nodes.pop()
        {
            return Ok(root);
        }
        Ok(Node::element(SYNTHETIC_ROOT_TAG, AttributesMap::new(), nodes))
    }

    // =========================================================================
    // Node lists
    // =========================================================================

    fn parse_nodes(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.at_end() || self.cursor.starts_with(b"</") {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        if self.cursor.peek_byte()? == b'<' {
            self.parse_element()
        } else {
            Ok(self.parse_text())
        }
    }

    fn parse_text(&mut self) -> Node {
        let offset = self.cursor.position();
        let bytes = self.cursor.scan_text_until_angle();
        Node::text(self.decode(bytes, offset))
    }

    // =========================================================================
    // Elements
    // =========================================================================

    fn parse_element(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor.position();
        let limit = self.options.depth_limit();
        if self.depth >= limit {
            return Err(ParseError::new(
                ParseErrorKind::MaxNestingDepthExceeded { limit },
                start,
            ));
        }

        self.cursor
            .expect_byte(b'<', ParseErrorKind::MissingOpeningAngleBracket)?;
        let tag = self.parse_name(NameRole::Tag)?;
        trace!(target: LOG_TARGET, "open <{tag}> at byte {start}");

        self.depth += 1;
        let result = self.parse_element_body(&tag);
        self.depth -= 1;

        // Running out of input anywhere inside this element (but not inside
        // a child, which reports itself) means the element was never closed.
        match result {
            Ok((attrs, children)) => {
                trace!(target: LOG_TARGET, "close </{tag}> at byte {}", self.cursor.position());
                Ok(Node::element(tag, attrs, children))
            }
            Err(err) if err.kind == ParseErrorKind::EndOfInput => Err(ParseError::new(
                ParseErrorKind::UnterminatedElement { tag },
                err.offset,
            )),
            Err(err) => Err(err),
        }
    }

    fn parse_element_body(&mut self, tag: &str) -> Result<(AttributesMap, Vec<Node>), ParseError> {
        let attrs = self.parse_attributes()?;
        self.cursor
            .expect_byte(b'>', ParseErrorKind::MissingClosingAngleBracket)?;

        let children = self.parse_nodes()?;

        self.cursor
            .expect_byte(b'<', ParseErrorKind::MissingClosingTagStart)?;
        self.cursor
            .expect_byte(b'/', ParseErrorKind::MissingClosingTagSlash)?;
        let close_offset = self.cursor.position();
        let close_tag = self.cursor.scan_name_token();
        if close_tag != tag {
            return Err(ParseError::new(
                ParseErrorKind::MismatchedClosingTag {
                    expected: tag.to_string(),
                    found: close_tag,
                },
                close_offset,
            ));
        }
        self.cursor
            .expect_byte(b'>', ParseErrorKind::MissingClosingAngleBracket)?;

        Ok((attrs, children))
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    fn parse_attributes(&mut self) -> Result<AttributesMap, ParseError> {
        let mut attrs = AttributesMap::new();
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek_byte()? == b'>' {
                return Ok(attrs);
            }

            let offset = self.cursor.position();
            let (name, value) = self.parse_attribute()?;
            if attrs.insert(name.clone(), value).is_some() {
                self.parse_warning(
                    IssueKind::DuplicateAttribute,
                    format!("duplicate attribute '{name}'; last value wins"),
                    offset,
                );
            }
        }
    }

    fn parse_attribute(&mut self) -> Result<(String, String), ParseError> {
        let name = self.parse_name(NameRole::Attribute)?;
        self.cursor.expect_byte(
            b'=',
            ParseErrorKind::MalformedAttributeAssignment { name: name.clone() },
        )?;

        let options = self.options;
        // Value bytes start just past the opening quote.
        let offset = self.cursor.position() + 1;
        let bytes = self.cursor.scan_quoted_value(|byte| options.is_quote(byte))?;
        let value = self.decode(bytes, offset);
        Ok((name, value))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Scan a tag or attribute name, applying the empty-name policy.
    fn parse_name(&mut self, role: NameRole) -> Result<String, ParseError> {
        let offset = self.cursor.position();
        let name = self.cursor.scan_name_token();
        if name.is_empty() {
            if self.options.reject_empty_names {
                return Err(ParseError::new(role.error(), offset));
            }
            self.parse_warning(role.issue(), role.message().to_string(), offset);
        }
        Ok(name)
    }

    /// Turn a scanned byte run into a string, replacing invalid UTF-8.
    fn decode(&mut self, bytes: &[u8], offset: usize) -> String {
        match str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(err) => {
                self.parse_warning(
                    IssueKind::InvalidUtf8,
                    "invalid UTF-8 replaced with U+FFFD".to_string(),
                    offset + err.valid_up_to(),
                );
                String::from_utf8_lossy(bytes).into_owned()
            }
        }
    }
}
