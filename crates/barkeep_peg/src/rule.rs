//! Grammar rules.
//!
//! A [`Rule`] is an immutable combinator tree. Grammars are assembled from
//! the constructor functions in this module and handed to
//! [`recognize`](crate::recognize).

use crate::trie::Trie;

/// A grammar rule, generic over the tag type carried by captures.
#[derive(Clone, Debug)]
pub enum Rule<T> {
    /// Exact, case-sensitive text
    Literal(String),
    /// Text compared with simple case folding
    LiteralIgnoreCase(String),
    /// One character from a set
    AnyOf(Vec<char>),
    /// Longest case-insensitive alternative
    Trie(Trie),
    /// Any single character
    Any,
    /// Only at the end of input
    EndOfInput,
    /// Every rule, consecutively
    Sequence(Vec<Rule<T>>),
    /// The first rule that matches
    FirstOf(Vec<Rule<T>>),
    /// Greedy repetition, possibly empty
    ZeroOrMore(Box<Rule<T>>),
    /// Greedy repetition, at least once
    OneOrMore(Box<Rule<T>>),
    /// The rule, or nothing
    Optional(Box<Rule<T>>),
    /// Zero-width positive lookahead
    Test(Box<Rule<T>>),
    /// Zero-width negative lookahead
    TestNot(Box<Rule<T>>),
    /// Records the text consumed by the inner rule under a tag
    Capture(T, Box<Rule<T>>),
}

/// Matches `text` exactly.
#[must_use]
pub fn literal<T>(text: impl Into<String>) -> Rule<T> {
    Rule::Literal(text.into())
}

/// Matches `text` ignoring case.
#[must_use]
pub fn literal_ignore_case<T>(text: impl Into<String>) -> Rule<T> {
    Rule::LiteralIgnoreCase(text.into())
}

/// Matches one character contained in `set`.
#[must_use]
pub fn any_of<T>(set: &str) -> Rule<T> {
    Rule::AnyOf(set.chars().collect())
}

/// Matches the longest of `alternatives` ignoring case.
///
/// Ties go to the alternative declared first.
#[must_use]
pub fn one_of<T, I, S>(alternatives: I) -> Rule<T>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Rule::Trie(Trie::new(alternatives))
}

/// Matches any single character.
#[must_use]
pub fn any<T>() -> Rule<T> {
    Rule::Any
}

/// Matches only when no input remains.
#[must_use]
pub fn end_of_input<T>() -> Rule<T> {
    Rule::EndOfInput
}

/// Matches a space or a tab.
#[must_use]
pub fn whitespace<T>() -> Rule<T> {
    any_of(" \t")
}

/// Matches every rule in order, or nothing at all.
#[must_use]
pub fn sequence<T>(rules: impl IntoIterator<Item = Rule<T>>) -> Rule<T> {
    Rule::Sequence(rules.into_iter().collect())
}

/// Matches the first rule that succeeds.
#[must_use]
pub fn first_of<T>(rules: impl IntoIterator<Item = Rule<T>>) -> Rule<T> {
    Rule::FirstOf(rules.into_iter().collect())
}

/// Repeats `rule` as often as it matches.
#[must_use]
pub fn zero_or_more<T>(rule: Rule<T>) -> Rule<T> {
    Rule::ZeroOrMore(Box::new(rule))
}

/// Repeats `rule` as often as it matches, at least once.
#[must_use]
pub fn one_or_more<T>(rule: Rule<T>) -> Rule<T> {
    Rule::OneOrMore(Box::new(rule))
}

/// Matches `rule` if possible; succeeds either way.
#[must_use]
pub fn optional<T>(rule: Rule<T>) -> Rule<T> {
    Rule::Optional(Box::new(rule))
}

/// Succeeds if `rule` would match here. Consumes nothing.
#[must_use]
pub fn test<T>(rule: Rule<T>) -> Rule<T> {
    Rule::Test(Box::new(rule))
}

/// Succeeds if `rule` would not match here. Consumes nothing.
#[must_use]
pub fn test_not<T>(rule: Rule<T>) -> Rule<T> {
    Rule::TestNot(Box::new(rule))
}

/// Records the text consumed by `rule` under `tag`.
#[must_use]
pub fn capture<T>(tag: T, rule: Rule<T>) -> Rule<T> {
    Rule::Capture(tag, Box::new(rule))
}
