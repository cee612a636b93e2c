//! Lexical scanners built on [`Cursor`].
//!
//! Byte classification is ASCII-only and looks at one byte at a time. Bytes
//! with the high bit set (any part of a multi-byte UTF-8 sequence) never
//! count as whitespace or as part of a name; they pass through untouched
//! inside text and attribute values.

use crate::cursor::Cursor;
use crate::error::{ParseError, ParseErrorKind};

// =============================================================================
// Byte Classes
// =============================================================================

/// Structural whitespace: space, tab, line feed, carriage return.
#[must_use]
pub const fn is_whitespace_byte(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Tag and attribute names: ASCII letters and digits.
#[must_use]
pub const fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}

// =============================================================================
// Scanners
// =============================================================================

impl<'a> Cursor<'a> {
    /// Discard a maximal run of structural whitespace.
    pub fn skip_whitespace(&mut self) {
        let _ = self.consume_while(is_whitespace_byte);
    }

    /// Read a maximal run of name bytes.
    ///
    /// May return an empty string, e.g. for `<>`; callers decide whether that
    /// is acceptable.
    pub fn scan_name_token(&mut self) -> String {
        self.consume_while(is_name_byte)
            .iter()
            .map(|&byte| char::from(byte))
            .collect()
    }

    /// Read every byte up to (not including) the next `<`, or to the end.
    pub fn scan_text_until_angle(&mut self) -> &'a [u8] {
        self.consume_while(|byte| byte != b'<')
    }

    /// Read a value delimited by `"` (or by any byte `is_quote` accepts),
    /// returning the bytes between the quotes.
    ///
    /// # Errors
    ///
    /// - [`ParseErrorKind::EndOfInput`] if the input ends where the opening
    ///   quote should be.
    /// - [`ParseErrorKind::MalformedAttributeValue`] if the next byte is not a
    ///   quote.
    /// - [`ParseErrorKind::UnterminatedAttributeValue`] if the input ends
    ///   before the matching closing quote.
    pub fn scan_quoted_value(
        &mut self,
        is_quote: impl Fn(u8) -> bool,
    ) -> Result<&'a [u8], ParseError> {
        let quote = self.peek_byte()?;
        if !is_quote(quote) {
            return Err(self.error(ParseErrorKind::MalformedAttributeValue));
        }
        let _ = self.consume_byte()?;

        let value = self.consume_while(|byte| byte != quote);
        if self.at_end() {
            return Err(self.error(ParseErrorKind::UnterminatedAttributeValue));
        }
        // consume_while stopped on the closing quote.
        let _ = self.consume_byte()?;
        Ok(value)
    }

    /// Consume the next byte, failing with `kind` (located at that byte) if it
    /// is not `expected`.
    ///
    /// # Errors
    ///
    /// [`ParseErrorKind::EndOfInput`] at the end of input, otherwise `kind`
    /// on a mismatch.
    pub fn expect_byte(&mut self, expected: u8, kind: ParseErrorKind) -> Result<(), ParseError> {
        let offset = self.position();
        if self.consume_byte()? == expected {
            Ok(())
        } else {
            Err(ParseError::new(kind, offset))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_bit_bytes_are_neither_names_nor_whitespace() {
        for byte in 0x80..=0xFF_u8 {
            assert!(!is_name_byte(byte));
            assert!(!is_whitespace_byte(byte));
        }
    }

    #[test]
    fn form_feed_and_vertical_tab_are_not_whitespace() {
        assert!(!is_whitespace_byte(0x0C));
        assert!(!is_whitespace_byte(0x0B));
        assert!(is_whitespace_byte(b'\r'));
    }
}
