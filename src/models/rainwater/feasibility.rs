//! Rainwater harvesting feasibility assessment.
//!
//! The computational core is in the internal [`core`] module; this module
//! re-exports its public pieces.
//!
//! The pipeline is strictly one-way: a validated [`SiteInput`] produces
//! runoff and harvest figures, those feed the cost and financial engine,
//! and everything feeds the feasibility scorer. [`assess`] runs the whole
//! pipeline in one call.

mod core;

pub use self::core::{
    ANALYSIS_HORIZON_YEARS, Assessment, CostComponents, CostConfig, DISCOUNT_RATE,
    FeasibilityResult, FinancialProjection, Harvest, InvalidInputError, MissingLookupError,
    Payback, RawSiteInput, RechargeStructure, RoofMaterial, RunoffCoefficient, Scheme, Score,
    ScoringFactor, SiteInput, SoilType, StateSchemeTable, assess,
};
