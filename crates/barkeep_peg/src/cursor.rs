//! Input cursor.
//!
//! Tracks the current byte offset into the input being recognized.

/// A position into a borrowed input string.
///
/// The position is always a byte offset on a `char` boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor<'i> {
    /// Full input text.
    input: &'i str,
    /// Current byte offset into `input`.
    position: usize,
}

impl<'i> Cursor<'i> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub const fn new(input: &'i str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the full input.
    #[must_use]
    pub const fn input(&self) -> &'i str {
        self.input
    }

    /// Returns the current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the input not yet consumed.
    #[must_use]
    pub fn rest(&self) -> &'i str {
        &self.input[self.position..]
    }

    /// Returns true when every byte has been consumed.
    #[must_use]
    pub const fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Returns the next character without consuming it.
    #[must_use]
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes and returns the next character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes `len` bytes.
    ///
    /// Callers pass lengths measured on `rest()`, so the new position stays
    /// on a `char` boundary. Overshooting clamps to the end of input.
    pub fn advance_by(&mut self, len: usize) {
        self.position = (self.position + len).min(self.input.len());
    }

    /// Moves back (or forward) to a previously observed position.
    pub fn reset(&mut self, position: usize) {
        debug_assert!(self.input.is_char_boundary(position));
        self.position = position;
    }

    /// Returns the input between two byte offsets.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'i str {
        &self.input[start..end]
    }
}
