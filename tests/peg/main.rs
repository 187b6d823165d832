//! Integration tests for the barkeep_peg crate.
//!
//! Tests for the recognition engine:
//! - Primitive matches (literals, sets, any, end of input)
//! - Longest-match alternatives
//! - Sequence, ordered choice, repetition, and lookahead
//! - Captures and semantic-action folds

mod capture_tests;
mod primitive_tests;
