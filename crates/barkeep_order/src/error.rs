//! Error types for order recognition.
//!
//! Uses `thiserror` for error definitions.

use thiserror::Error;

/// Result type for recognition.
pub type Result<T> = std::result::Result<T, RecognizeError>;

/// Why a line could not be turned into an order.
///
/// There is deliberately a single kind: a line either is an order or it is
/// not, and callers are expected to ask again.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RecognizeError {
    /// The line did not match the order grammar.
    #[error("not understood")]
    NotUnderstood,
}

/// A vessel name outside the fixed vocabulary.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown vessel: {0}")]
pub struct ParseVesselError(pub String);
