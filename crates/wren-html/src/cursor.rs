//! Byte cursor over the input buffer.
//!
//! This is the only code that indexes the input directly. Everything above it
//! goes through [`Cursor::at_end`], [`Cursor::peek_byte`],
//! [`Cursor::starts_with`], [`Cursor::consume_byte`] and
//! [`Cursor::consume_while`].

use crate::error::{ParseError, ParseErrorKind};

/// A read-only input buffer plus the number of bytes consumed so far.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at the first byte of `input`.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { input, position: 0 }
    }

    /// Byte offset of the next unconsumed byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.input.len().saturating_sub(self.position)
    }

    /// True once every byte has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Look at the next byte without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::EndOfInput`] if the cursor is at the end.
    pub fn peek_byte(&self) -> Result<u8, ParseError> {
        self.input
            .get(self.position)
            .copied()
            .ok_or_else(|| self.error(ParseErrorKind::EndOfInput))
    }

    /// Whether the unconsumed input begins with `literal`.
    ///
    /// Running out of input is simply a mismatch, not an error.
    #[must_use]
    pub fn starts_with(&self, literal: &[u8]) -> bool {
        self.input
            .get(self.position..)
            .is_some_and(|rest| rest.starts_with(literal))
    }

    /// Consume and return the next byte.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::EndOfInput`] if the cursor is at the end.
    pub fn consume_byte(&mut self) -> Result<u8, ParseError> {
        let byte = self.peek_byte()?;
        self.position += 1;
        Ok(byte)
    }

    /// Consume the longest run of bytes for which `test` holds.
    ///
    /// Stops at the end of input or the first failing byte. The returned slice
    /// borrows from the input and may be empty.
    pub fn consume_while(&mut self, test: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.position;
        while let Some(&byte) = self.input.get(self.position)
            && test(byte)
        {
            self.position += 1;
        }
        &self.input[start..self.position]
    }

    /// Build an error of `kind` located at the current position.
    #[must_use]
    pub const fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.position)
    }
}
