//! Ordered-choice, backtracking recognizer over string input.
//!
//! Grammars are trees of [`Rule`]s in the PEG style: ordered choice commits
//! to the first alternative that matches, repetition is greedy, and there is
//! never more than one parse. A failed rule backtracks silently; only the
//! outcome of the top rule is reported.
//!
//! ```text
//!   Rule tree ──┐
//!               ▼
//!      ┌─────────────────┐
//!      │ MATCHER         │  depth-first walk over a Cursor,
//!      │                 │  checkpoint/restore on failure
//!      └─────────────────┘
//!               │
//!               ▼
//!      Recognition { consumed, captures } ──► fold(init, action)
//! ```
//!
//! Semantic actions are folds over the tagged captures of the successful
//! path, so a grammar produces an immutable value without a mutable parse
//! stack.
//!
//! # Modules
//!
//! - [`cursor`] - Byte cursor over the input
//! - [`trie`] - Case-insensitive longest-match alternatives
//! - [`rule`] - Combinator tree and constructors
//! - [`matcher`] - Evaluation, captures, and recognition results

pub mod cursor;
pub mod matcher;
pub mod rule;
pub mod trie;

pub use cursor::Cursor;
pub use matcher::{Capture, Recognition, recognize};
pub use rule::{
    Rule, any, any_of, capture, end_of_input, first_of, literal, literal_ignore_case, one_of,
    one_or_more, optional, sequence, test, test_not, whitespace, zero_or_more,
};
pub use trie::Trie;
