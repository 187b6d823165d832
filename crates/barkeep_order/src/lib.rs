//! Drink order recognition.
//!
//! Turns a line like "a pint of duck vomit, please" into an [`Order`]:
//! a [`Vessel`] plus a normalized description, or the terminal order when
//! the speaker says they want nothing more.
//!
//! ```text
//! "A pint of Duck   Vomit, please."
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ORDER GRAMMAR   │  → captures: Vessel("pint"), Description("Duck   Vomit")
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SEMANTIC        │  → Order { vessel: Pint, description: "duck vomit" }
//! │ ACTIONS (fold)  │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`vessel`] - Container kinds
//! - [`vocabulary`] - Fixed word tables
//! - [`order`] - The order record and description normalization
//! - [`grammar`] - Grammar rules and the recognizer entry points
//! - [`config`] - Recognizer configuration
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod grammar;
pub mod order;
pub mod vessel;
pub mod vocabulary;

pub use config::RecognizerConfig;
pub use error::{ParseVesselError, RecognizeError, Result};
pub use grammar::{OrderGrammar, OrderTag, recognize_order};
pub use order::{Order, normalize};
pub use vessel::Vessel;
