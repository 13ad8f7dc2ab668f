//! Weighted feasibility scoring.
//!
//! Each factor maps to a 0-100 sub-score, and the composite is a weighted
//! sum over the data-driven table in [`WEIGHTS`]. Sub-scores are clamped
//! into range before weighting, so the composite stays in [0, 100] no
//! matter how extreme the inputs are.

#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{
    area::square_meter,
    length::{meter, millimeter},
    ratio::ratio,
};

use super::{input::SiteInput, runoff::RunoffCoefficient};

/// A site factor contributing to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ScoringFactor {
    Soil,
    Rainfall,
    Depth,
    Area,
    Runoff,
}

/// Composite weight for each factor. The weights must sum to 1.0 so the
/// composite inherits the sub-scores' 0-100 range; [`weights_are_valid`]
/// checks this and scoring asserts it in debug builds.
pub(crate) static WEIGHTS: &[(ScoringFactor, f64)] = &[
    (ScoringFactor::Soil, 0.25),
    (ScoringFactor::Rainfall, 0.30),
    (ScoringFactor::Depth, 0.20),
    (ScoringFactor::Area, 0.15),
    (ScoringFactor::Runoff, 0.10),
];

/// Checks that the weight table forms a proper weighted average.
pub(crate) fn weights_are_valid() -> bool {
    let sum: f64 = WEIGHTS.iter().map(|(_, weight)| weight).sum();
    (sum - 1.0).abs() < 1e-9
}

impl ScoringFactor {
    /// This factor's weight in the composite.
    #[must_use]
    pub fn weight(self) -> f64 {
        WEIGHTS
            .iter()
            .find(|(factor, _)| *factor == self)
            .map(|(_, weight)| *weight)
            .expect("every scoring factor has a weight entry")
    }
}

/// A score clamped to the 0-100 scale.
///
/// Serialization is one-way: results can be written out, but a score is
/// only ever constructed through [`Score::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Score(f64);

impl Score {
    /// Clamps a raw value into [0, 100].
    #[must_use]
    pub fn clamped(raw: f64) -> Self {
        Self(raw.clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Sub-scores and composite feasibility for one site.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FeasibilityResult {
    pub soil: Score,
    pub rainfall: Score,
    pub depth: Score,
    pub area: Score,
    pub runoff: Score,

    /// Weighted combination of the five sub-scores.
    pub composite: Score,
}

impl FeasibilityResult {
    /// Scores a site.
    ///
    /// Sub-score transforms: soil scales the 0-10 suitability rating to
    /// 0-100; rainfall saturates at 1500 mm; depth loses three points per
    /// meter of water table depth; area saturates at 200 m2; runoff is
    /// the coefficient on a 0-100 scale, clamped because coefficients may
    /// exceed 1.0.
    pub fn evaluate(input: &SiteInput, coefficient: RunoffCoefficient) -> Self {
        debug_assert!(weights_are_valid(), "scoring weights must sum to 1.0");

        let soil = Score::clamped(input.soil_suitability() * 10.0);
        let rainfall = Score::clamped(input.annual_rainfall().get::<millimeter>() / 15.0);
        let depth = Score::clamped(100.0 - input.water_table_depth().get::<meter>() * 3.0);
        let area = Score::clamped(input.roof_area().get::<square_meter>() / 2.0);
        let runoff = Score::clamped(coefficient.get::<ratio>() * 100.0);

        let sub_score = |factor: ScoringFactor| -> Score {
            match factor {
                ScoringFactor::Soil => soil,
                ScoringFactor::Rainfall => rainfall,
                ScoringFactor::Depth => depth,
                ScoringFactor::Area => area,
                ScoringFactor::Runoff => runoff,
            }
        };

        let composite: f64 = WEIGHTS
            .iter()
            .map(|(factor, weight)| weight * sub_score(*factor).value())
            .sum();

        Self {
            soil,
            rainfall,
            depth,
            area,
            runoff,
            composite: Score::clamped(composite),
        }
    }
}
