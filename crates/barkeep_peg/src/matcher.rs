//! Rule evaluation.
//!
//! Walks a [`Rule`] tree depth-first over a [`Cursor`], backtracking on
//! failure. Failure is an ordinary `false`, never an error.
//!
//! Invariant: a rule that fails leaves both the cursor and the capture log
//! exactly as it found them. Captures recorded inside a branch that is later
//! abandoned are therefore never observed by the caller.

use std::ops::Range;

use crate::cursor::Cursor;
use crate::rule::Rule;
use crate::trie::prefix_len_ignore_case;

/// Text recorded by a [`Rule::Capture`] on the successful path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capture<'i, T> {
    /// Tag given to the capture rule
    pub tag: T,
    /// Byte range of the captured text
    pub span: Range<usize>,
    /// The captured text
    pub text: &'i str,
}

/// A successful match of a rule against a prefix of the input.
#[derive(Clone, Debug)]
pub struct Recognition<'i, T> {
    input: &'i str,
    consumed: usize,
    captures: Vec<Capture<'i, T>>,
}

impl<'i, T> Recognition<'i, T> {
    /// Number of bytes consumed.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// The consumed prefix of the input.
    #[must_use]
    pub fn matched(&self) -> &'i str {
        &self.input[..self.consumed]
    }

    /// Returns true when the whole input was consumed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.consumed == self.input.len()
    }

    /// Captures in order of their start position, outer before inner.
    #[must_use]
    pub fn captures(&self) -> &[Capture<'i, T>] {
        &self.captures
    }

    /// Returns the first capture carrying `tag`.
    #[must_use]
    pub fn capture(&self, tag: &T) -> Option<&Capture<'i, T>>
    where
        T: PartialEq,
    {
        self.captures.iter().find(|c| c.tag == *tag)
    }

    /// Replays every capture, in order, through a semantic action.
    ///
    /// This is how a grammar turns a match into a value: the action receives
    /// the accumulator and one capture at a time, and only captures from the
    /// successful path are ever replayed.
    pub fn fold<A, F>(self, init: A, action: F) -> A
    where
        F: FnMut(A, Capture<'i, T>) -> A,
    {
        self.captures.into_iter().fold(init, action)
    }
}

/// Matches `rule` against a prefix of `input`.
///
/// Wrap the rule in a sequence ending with
/// [`end_of_input`](crate::end_of_input) to require the whole input.
#[must_use]
pub fn recognize<'i, T: Clone>(rule: &Rule<T>, input: &'i str) -> Option<Recognition<'i, T>> {
    let mut matcher = Matcher::new(input);
    if !matcher.run(rule) {
        return None;
    }
    Some(Recognition {
        input,
        consumed: matcher.cursor.position(),
        captures: matcher.captures,
    })
}

/// Saved matcher state for backtracking.
#[derive(Clone, Copy)]
struct Checkpoint {
    position: usize,
    captures: usize,
}

struct Matcher<'i, T> {
    cursor: Cursor<'i>,
    captures: Vec<Capture<'i, T>>,
}

impl<'i, T: Clone> Matcher<'i, T> {
    fn new(input: &'i str) -> Self {
        Self {
            cursor: Cursor::new(input),
            captures: Vec::new(),
        }
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.cursor.position(),
            captures: self.captures.len(),
        }
    }

    fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.reset(checkpoint.position);
        self.captures.truncate(checkpoint.captures);
    }

    fn run(&mut self, rule: &Rule<T>) -> bool {
        match rule {
            Rule::Literal(text) => {
                if self.cursor.rest().starts_with(text.as_str()) {
                    self.cursor.advance_by(text.len());
                    true
                } else {
                    false
                }
            }
            Rule::LiteralIgnoreCase(text) => match prefix_len_ignore_case(self.cursor.rest(), text)
            {
                Some(len) => {
                    self.cursor.advance_by(len);
                    true
                }
                None => false,
            },
            Rule::AnyOf(set) => match self.cursor.peek_char() {
                Some(c) if set.contains(&c) => {
                    self.cursor.advance();
                    true
                }
                _ => false,
            },
            Rule::Trie(trie) => match trie.longest_match(self.cursor.rest()) {
                Some((_, len)) => {
                    self.cursor.advance_by(len);
                    true
                }
                None => false,
            },
            Rule::Any => self.cursor.advance().is_some(),
            Rule::EndOfInput => self.cursor.at_end(),
            Rule::Sequence(rules) => {
                let checkpoint = self.checkpoint();
                for rule in rules {
                    if !self.run(rule) {
                        self.restore(checkpoint);
                        return false;
                    }
                }
                true
            }
            Rule::FirstOf(rules) => {
                let checkpoint = self.checkpoint();
                for rule in rules {
                    if self.run(rule) {
                        return true;
                    }
                    self.restore(checkpoint);
                }
                false
            }
            Rule::ZeroOrMore(inner) => {
                self.repeat(inner);
                true
            }
            Rule::OneOrMore(inner) => self.repeat(inner) > 0,
            Rule::Optional(inner) => {
                self.run(inner);
                true
            }
            Rule::Test(inner) => self.look_ahead(inner),
            Rule::TestNot(inner) => !self.look_ahead(inner),
            Rule::Capture(tag, inner) => {
                let start = self.cursor.position();
                let slot = self.captures.len();
                if !self.run(inner) {
                    return false;
                }
                let end = self.cursor.position();
                self.captures.insert(
                    slot,
                    Capture {
                        tag: tag.clone(),
                        span: start..end,
                        text: self.cursor.slice(start, end),
                    },
                );
                true
            }
        }
    }

    /// Runs `inner` until it fails, returning the number of successes.
    ///
    /// An iteration that succeeds without consuming input ends the loop.
    fn repeat(&mut self, inner: &Rule<T>) -> usize {
        let mut count = 0;
        loop {
            let before = self.cursor.position();
            if !self.run(inner) {
                return count;
            }
            count += 1;
            if self.cursor.position() == before {
                return count;
            }
        }
    }

    fn look_ahead(&mut self, inner: &Rule<T>) -> bool {
        let checkpoint = self.checkpoint();
        let matched = self.run(inner);
        self.restore(checkpoint);
        matched
    }
}
