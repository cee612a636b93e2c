//! Parser configuration.
//!
//! [`ParserOptions::default`] is the baseline grammar: double-quoted
//! attribute values only, empty names accepted, nesting bounded at
//! [`DEFAULT_MAX_DEPTH`]. No configuration can raise the bound past
//! [`MAX_SUPPORTED_DEPTH`].

/// Nesting depth allowed when no other limit is configured.
///
/// Each level costs a few stack frames, so this stays far below what the
/// default 2 MiB thread stack can hold.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Hard ceiling on the nesting depth, whatever [`ParserOptions::max_depth`]
/// says.
///
/// The element and node-list parsers recurse once per level, so this is what
/// keeps deep input from exhausting the thread stack.
pub const MAX_SUPPORTED_DEPTH: usize = 512;

/// Knobs for [`HTMLParser`](crate::HTMLParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum element nesting depth before failing with
    /// [`MaxNestingDepthExceeded`](crate::ParseErrorKind::MaxNestingDepthExceeded).
    /// Values above [`MAX_SUPPORTED_DEPTH`] are treated as that ceiling.
    pub max_depth: usize,
    /// Also accept `'`-delimited attribute values. The closing quote must be
    /// the same byte as the opening one.
    pub allow_single_quotes: bool,
    /// Fail on empty tag or attribute names instead of recording an issue.
    pub reject_empty_names: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserOptions {
    /// The baseline options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_single_quotes: false,
            reject_empty_names: false,
        }
    }

    /// Set the maximum nesting depth, clamped to [`MAX_SUPPORTED_DEPTH`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = if max_depth > MAX_SUPPORTED_DEPTH {
            MAX_SUPPORTED_DEPTH
        } else {
            max_depth
        };
        self
    }

    /// The nesting depth the parser actually enforces.
    ///
    /// Same as `max_depth` unless the field was set past the ceiling directly.
    #[must_use]
    pub const fn depth_limit(&self) -> usize {
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            MAX_SUPPORTED_DEPTH
        } else {
            self.max_depth
        }
    }

    /// Accept single-quoted attribute values as well as double-quoted ones.
    #[must_use]
    pub const fn with_single_quotes(mut self) -> Self {
        self.allow_single_quotes = true;
        self
    }

    /// Treat empty tag and attribute names as errors.
    #[must_use]
    pub const fn with_strict_names(mut self) -> Self {
        self.reject_empty_names = true;
        self
    }

    /// Whether `byte` may open a quoted attribute value.
    #[must_use]
    pub const fn is_quote(&self, byte: u8) -> bool {
        byte == b'"' || (self.allow_single_quotes && byte == b'\'')
    }
}
