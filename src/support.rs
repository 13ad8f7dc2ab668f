//! Supporting utilities used by models.
//!
//! Modules here are part of the public API because they're useful, but
//! their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts inside a model's internal `core` module and moves
//! here once it is useful across models.

pub mod constraint;
