//! Public assessment models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! `rainwater`). This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module. Larger models contain an internal
//! `core` submodule where the actual computation and domain logic lives;
//! the model module itself is a thin facade that re-exports the public
//! pieces of its core.

pub mod rainwater;
