//! # Rainharvest Models
//!
//! Deterministic models for rooftop rainwater harvesting feasibility
//! assessment.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific assessment models.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Design
//!
//! Every model in this crate is a pure function over its inputs: one call,
//! one deterministic result, no shared mutable state and no I/O. External
//! data (rainfall series, soil classification, groundwater depth) must be
//! resolved by the caller before a model is invoked.
//!
//! Physical quantities use [`uom`] throughout. Numeric invariants such as
//! "strictly positive" or "within the supported range" are enforced at
//! construction time through the types in [`support::constraint`], so a
//! value that reaches a model is already known to be valid.

pub mod models;
pub mod support;
