//! Static coefficient tables.
//!
//! The roof and soil tables are immutable data consulted through fallible
//! lookups. A missing entry is a [`MissingLookupError`], never a silently
//! substituted default; updating a coefficient means editing the table,
//! not the calculation code.

use thiserror::Error;

use super::input::{RoofMaterial, SoilType};

/// Base runoff coefficient by roofing material.
static ROOF_COEFFICIENTS: &[(RoofMaterial, f64)] = &[
    (RoofMaterial::Concrete, 0.85),
    (RoofMaterial::Metal, 0.90),
    (RoofMaterial::Tiled, 0.80),
    (RoofMaterial::Thatched, 0.60),
    (RoofMaterial::Asbestos, 0.85),
    (RoofMaterial::Slate, 0.88),
];

/// Runoff adjustment factor by surrounding soil type.
static SOIL_ADJUSTMENTS: &[(SoilType, f64)] = &[
    (SoilType::Sandy, 0.95),
    (SoilType::Clay, 1.05),
    (SoilType::Loamy, 1.00),
    (SoilType::Rocky, 1.10),
];

/// An error returned when a static table has no entry for a key.
///
/// Callers must supply a fallback themselves or fail the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingLookupError {
    #[error("no runoff coefficient entry for roof material {material:?}")]
    RoofMaterial { material: RoofMaterial },

    #[error("no adjustment factor entry for soil type {soil:?}")]
    SoilType { soil: SoilType },

    #[error("no subsidy scheme entry for state {state:?}")]
    State { state: String },
}

/// Looks up the base runoff coefficient for a roofing material.
///
/// # Errors
///
/// Returns a [`MissingLookupError`] if the material has no table entry.
pub(super) fn roof_coefficient(material: RoofMaterial) -> Result<f64, MissingLookupError> {
    ROOF_COEFFICIENTS
        .iter()
        .find(|(key, _)| *key == material)
        .map(|(_, value)| *value)
        .ok_or(MissingLookupError::RoofMaterial { material })
}

/// Looks up the runoff adjustment factor for a soil type.
///
/// # Errors
///
/// Returns a [`MissingLookupError`] if the soil type has no table entry.
pub(super) fn soil_adjustment(soil: SoilType) -> Result<f64, MissingLookupError> {
    SOIL_ADJUSTMENTS
        .iter()
        .find(|(key, _)| *key == soil)
        .map(|(_, value)| *value)
        .ok_or(MissingLookupError::SoilType { soil })
}
