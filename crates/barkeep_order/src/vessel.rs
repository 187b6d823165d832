//! Container kinds a drink can be served in.

use std::fmt;
use std::str::FromStr;

use barkeep_peg::trie::fold_char;

use crate::error::ParseVesselError;

/// A recognized container kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Vessel {
    Pint,
    Bowl,
    Spoon,
    Glass,
    Cup,
    Pitcher,
    Magnum,
    Bottle,
}

impl Vessel {
    /// Every vessel, in vocabulary order.
    pub const ALL: [Vessel; 8] = [
        Vessel::Pint,
        Vessel::Bowl,
        Vessel::Spoon,
        Vessel::Glass,
        Vessel::Cup,
        Vessel::Pitcher,
        Vessel::Magnum,
        Vessel::Bottle,
    ];

    /// The lowercase keyword for this vessel.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Vessel::Pint => "pint",
            Vessel::Bowl => "bowl",
            Vessel::Spoon => "spoon",
            Vessel::Glass => "glass",
            Vessel::Cup => "cup",
            Vessel::Pitcher => "pitcher",
            Vessel::Magnum => "magnum",
            Vessel::Bottle => "bottle",
        }
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vessel {
    type Err = ParseVesselError;

    /// Parses a vessel keyword, folding case the way the grammar does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vessel::ALL
            .into_iter()
            .find(|v| s.chars().map(fold_char).eq(v.name().chars()))
            .ok_or_else(|| ParseVesselError(s.to_string()))
    }
}
