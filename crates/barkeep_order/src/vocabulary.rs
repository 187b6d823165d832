//! Fixed word tables for the order grammar.
//!
//! Read-only after compilation; safe to share between threads.

use crate::vessel::Vessel;

/// Leading articles, consumed and discarded.
pub const ARTICLES: &[&str] = &["a", "an", "the"];

/// Trailing courtesy words that bound the description and are discarded.
pub const POLITENESS: &[&str] = &["please", "pls", "okay", "ok", "yo"];

/// Words meaning the speaker wants nothing more.
pub const CANCELLATIONS: &[&str] = &["nothing", "nada", "zilch", "done"];

/// Sentence-ending punctuation accepted once at the end of a line.
pub const TERMINAL_PUNCTUATION: &str = ".!?";

/// Vessel keywords in vocabulary order.
pub fn vessel_names() -> impl Iterator<Item = &'static str> {
    Vessel::ALL.into_iter().map(Vessel::name)
}
