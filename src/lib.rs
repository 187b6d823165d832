//! Barkeep - natural-language drink order recognition
//!
//! This crate re-exports both layers of the system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: barkeep_order — Vocabulary, Order record, order grammar
//! Layer 0: barkeep_peg   — Ordered-choice backtracking recognizer
//! ```

pub use barkeep_order as order;
pub use barkeep_peg as peg;

pub use barkeep_order::{Order, RecognizeError, Vessel, recognize_order};
