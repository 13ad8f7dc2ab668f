//! State subsidy schemes.
//!
//! Subsidies are keyed by state name. The table ships with the published
//! state programs and can be extended or replaced wholesale; with the
//! `serde` feature it can be loaded from data instead of code.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::lookup::MissingLookupError;

/// One subsidy program: a percentage of the project cost up to a cap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scheme {
    /// Program name as published by the state.
    pub name: String,

    /// Fraction of the total project cost covered.
    pub subsidy_rate: f64,

    /// Largest amount the program pays out, in rupees.
    pub max_amount: f64,
}

impl Scheme {
    /// The subsidy granted against a total project cost.
    ///
    /// The rate applies up to the program cap, whichever is smaller.
    pub fn subsidy(&self, total_cost: f64) -> f64 {
        (total_cost * self.subsidy_rate).min(self.max_amount)
    }
}

/// Subsidy schemes by state name.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateSchemeTable {
    entries: BTreeMap<String, Scheme>,
}

impl StateSchemeTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of published state programs.
    #[must_use]
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(
            "Tamil Nadu",
            Scheme {
                name: "TN Rainwater Harvesting Scheme".into(),
                subsidy_rate: 0.75,
                max_amount: 40_000.0,
            },
        );
        table.insert(
            "Karnataka",
            Scheme {
                name: "Karnataka RWH Initiative".into(),
                subsidy_rate: 0.60,
                max_amount: 35_000.0,
            },
        );
        table.insert(
            "Maharashtra",
            Scheme {
                name: "Jalyukt Shivar Abhiyan".into(),
                subsidy_rate: 0.70,
                max_amount: 45_000.0,
            },
        );
        table
    }

    /// Adds or replaces the scheme for a state.
    pub fn insert(&mut self, state: impl Into<String>, scheme: Scheme) {
        self.entries.insert(state.into(), scheme);
    }

    /// Looks up the scheme for a state by exact name.
    ///
    /// # Errors
    ///
    /// Returns a [`MissingLookupError`] if the state has no entry. There
    /// is no central fallback; callers wanting one must insert it under
    /// the state names it covers.
    pub fn lookup(&self, state: &str) -> Result<&Scheme, MissingLookupError> {
        self.entries
            .get(state)
            .ok_or_else(|| MissingLookupError::State {
                state: state.to_owned(),
            })
    }

    /// Number of states with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
