//! Configuration for the order recognizer.

/// Default upper bound on line length, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024;

/// Configuration for [`OrderGrammar`](crate::OrderGrammar).
///
/// The vocabulary itself is fixed; these knobs only shape how it is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Let cancellation words take the politeness/punctuation tail too
    /// ("done, please."). Off by default: a bare cancellation word must end
    /// the line.
    pub lenient_cancellation: bool,

    /// Lines longer than this many bytes are rejected without matching.
    pub max_input_len: Option<usize>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            lenient_cancellation: false,
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
        }
    }
}

impl RecognizerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to accept a tail after cancellation words.
    #[must_use]
    pub fn with_lenient_cancellation(mut self, lenient: bool) -> Self {
        self.lenient_cancellation = lenient;
        self
    }

    /// Builder method to set (or lift, with `None`) the line length limit.
    #[must_use]
    pub fn with_max_input_len(mut self, max: Option<usize>) -> Self {
        self.max_input_len = max;
        self
    }

    /// Returns true if `line` is within the length limit.
    #[must_use]
    pub fn accepts_len(&self, line: &str) -> bool {
        self.max_input_len.is_none_or(|max| line.len() <= max)
    }
}
