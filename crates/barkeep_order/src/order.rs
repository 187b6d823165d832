//! The recognized order.
//!
//! An [`Order`] is either a drink (vessel plus description) or the terminal
//! signal meaning the speaker wants nothing more. Never both, never neither.

use crate::vessel::Vessel;

/// Normalizes a drink description.
///
/// Trims the ends, collapses every internal whitespace run to one space,
/// and lowercases.
#[must_use]
pub fn normalize(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A parsed drink order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    vessel: Option<Vessel>,
    description: String,
    terminal: bool,
}

impl Order {
    /// Creates a drink order, normalizing the description.
    ///
    /// Returns `None` if the description normalizes to nothing.
    #[must_use]
    pub fn drink(vessel: Vessel, description: &str) -> Option<Self> {
        let description = normalize(description);
        if description.is_empty() {
            return None;
        }
        Some(Self {
            vessel: Some(vessel),
            description,
            terminal: false,
        })
    }

    /// Creates the end-of-session order.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            vessel: None,
            description: String::new(),
            terminal: true,
        }
    }

    /// The container, absent only for terminal orders.
    #[must_use]
    pub fn vessel(&self) -> Option<Vessel> {
        self.vessel
    }

    /// The normalized description, empty only for terminal orders.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// True if the speaker wants nothing further.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

/// Accumulates grammar captures into an [`Order`].
#[derive(Debug, Default)]
pub(crate) struct OrderBuilder {
    vessel: Option<Vessel>,
    description: Option<String>,
    terminal: bool,
}

impl OrderBuilder {
    pub(crate) fn vessel(mut self, vessel: Option<Vessel>) -> Self {
        self.vessel = vessel;
        self
    }

    pub(crate) fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub(crate) fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    /// Produces the order, or `None` if the captures did not add up to one.
    pub(crate) fn finish(self) -> Option<Order> {
        match self {
            Self {
                terminal: true,
                vessel: None,
                description: None,
            } => Some(Order::terminal()),
            Self {
                terminal: false,
                vessel: Some(vessel),
                description: Some(description),
            } => Order::drink(vessel, &description),
            _ => None,
        }
    }
}
