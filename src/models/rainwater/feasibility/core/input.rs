//! Site input validation and normalization.
//!
//! Raw user-entered values come in as bare numbers through
//! [`RawSiteInput`]. [`SiteInput::new`] is the only way to obtain a
//! [`SiteInput`], so every value downstream of it is already known to be
//! in range and the pipeline never re-validates.

use thiserror::Error;
use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio, Volume},
    length::{meter, millimeter},
    ratio::ratio,
    volume::liter,
};

use crate::support::constraint::{
    ConstraintError, NonNegative, RangeBounds, StrictlyPositive, Within,
};

/// System efficiency applied when the caller does not supply one.
///
/// Accounts for first-flush diversion, evaporation, and conveyance losses.
pub(crate) const DEFAULT_EFFICIENCY: f64 = 0.85;

/// Roofing material of the catchment surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoofMaterial {
    Concrete,
    Metal,
    Tiled,
    Thatched,
    Asbestos,
    Slate,
}

/// Soil classification of the ground surrounding the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Sandy,
    Clay,
    Loamy,
    Rocky,
}

/// Admissible range for a single rainfall figure, annual or monthly.
struct RainfallRange;

impl RangeBounds<Length> for RainfallRange {
    fn lower() -> Length {
        Length::new::<millimeter>(0.0)
    }
    fn upper() -> Length {
        Length::new::<millimeter>(10_000.0)
    }
}

/// Admissible range for the water table depth.
struct DepthRange;

impl RangeBounds<Length> for DepthRange {
    fn lower() -> Length {
        Length::new::<meter>(0.0)
    }
    fn upper() -> Length {
        Length::new::<meter>(100.0)
    }
}

/// Admissible range for the system efficiency fraction.
struct EfficiencyRange;

impl RangeBounds<Ratio> for EfficiencyRange {
    fn lower() -> Ratio {
        Ratio::new::<ratio>(0.70)
    }
    fn upper() -> Ratio {
        Ratio::new::<ratio>(0.95)
    }
}

/// Admissible range for the soil suitability rating.
struct RatingRange;

impl RangeBounds<f64> for RatingRange {
    fn lower() -> f64 {
        0.0
    }
    fn upper() -> f64 {
        10.0
    }
}

/// An error returned when a raw input value is rejected by the normalizer.
///
/// Surfaced directly to the caller; nothing in this crate retries or
/// substitutes a default for a rejected value.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    #[error("roof area must be strictly positive")]
    RoofArea(#[source] ConstraintError),

    #[error("annual rainfall must be between 0 and 10000 mm")]
    AnnualRainfall(#[source] ConstraintError),

    #[error("rainfall for month {month} must be between 0 and 10000 mm")]
    MonthlyRainfall {
        /// Month number, 1 through 12.
        month: usize,
        #[source]
        source: ConstraintError,
    },

    #[error("water table depth must be between 0 and 100 m")]
    WaterTableDepth(#[source] ConstraintError),

    #[error("storage capacity must be non-negative")]
    StorageCapacity(#[source] ConstraintError),

    #[error("system efficiency must be between 0.70 and 0.95")]
    Efficiency(#[source] ConstraintError),

    #[error("soil suitability rating must be on the 0-10 scale")]
    SoilSuitability(#[source] ConstraintError),
}

/// Raw user-entered values for one site, before validation.
///
/// Field names carry the expected unit. The rainfall provider's annual
/// total and monthly series are independent measurements; the monthly
/// figures need not sum to the annual figure and are never reconciled.
#[derive(Debug, Clone)]
pub struct RawSiteInput {
    pub roof_area_m2: f64,
    pub roof_material: RoofMaterial,
    pub soil_type: SoilType,
    pub annual_rainfall_mm: f64,
    /// January through December.
    pub monthly_rainfall_mm: [f64; 12],
    pub water_table_depth_m: f64,
    pub storage_capacity_l: f64,
    /// System efficiency fraction. `None` applies the 0.85 default.
    pub efficiency: Option<f64>,
    /// Suitability rating from the soil provider, 0 (unsuitable) to 10.
    pub soil_suitability: f64,
    /// State or region name, the key for the subsidy scheme lookup.
    pub state: String,
    /// Whether a groundwater recharge structure should be sized and costed.
    pub recharge_requested: bool,
}

/// A validated site, ready for assessment.
///
/// Constructed once per query via [`SiteInput::new`], consumed immutably
/// through the pipeline, and discarded.
#[derive(Debug, Clone)]
pub struct SiteInput {
    roof_area: Area,
    roof_material: RoofMaterial,
    soil_type: SoilType,
    annual_rainfall: Length,
    monthly_rainfall: [Length; 12],
    water_table_depth: Length,
    storage_capacity: Volume,
    efficiency: Ratio,
    soil_suitability: f64,
    state: String,
    recharge_requested: bool,
}

impl SiteInput {
    /// Validates raw values and constructs a normalized site input.
    ///
    /// Applies the default efficiency when none is supplied.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInputError`] naming the first offending field:
    /// non-positive roof area, rainfall outside [0, 10000] mm, water table
    /// depth outside [0, 100] m, negative storage capacity, efficiency
    /// outside [0.70, 0.95], or a suitability rating off the 0-10 scale.
    pub fn new(raw: RawSiteInput) -> Result<Self, InvalidInputError> {
        let roof_area = StrictlyPositive::new(Area::new::<square_meter>(raw.roof_area_m2))
            .map_err(InvalidInputError::RoofArea)?
            .into_inner();

        let annual_rainfall =
            Within::<RainfallRange>::new(Length::new::<millimeter>(raw.annual_rainfall_mm))
                .map_err(InvalidInputError::AnnualRainfall)?
                .into_inner();

        let mut monthly_rainfall = [Length::new::<millimeter>(0.0); 12];
        for (index, mm) in raw.monthly_rainfall_mm.iter().enumerate() {
            monthly_rainfall[index] =
                Within::<RainfallRange>::new(Length::new::<millimeter>(*mm))
                    .map_err(|source| InvalidInputError::MonthlyRainfall {
                        month: index + 1,
                        source,
                    })?
                    .into_inner();
        }

        let water_table_depth =
            Within::<DepthRange>::new(Length::new::<meter>(raw.water_table_depth_m))
                .map_err(InvalidInputError::WaterTableDepth)?
                .into_inner();

        let storage_capacity = NonNegative::new(Volume::new::<liter>(raw.storage_capacity_l))
            .map_err(InvalidInputError::StorageCapacity)?
            .into_inner();

        let efficiency = Within::<EfficiencyRange>::new(Ratio::new::<ratio>(
            raw.efficiency.unwrap_or(DEFAULT_EFFICIENCY),
        ))
        .map_err(InvalidInputError::Efficiency)?
        .into_inner();

        let soil_suitability = Within::<RatingRange>::new(raw.soil_suitability)
            .map_err(InvalidInputError::SoilSuitability)?
            .into_inner();

        Ok(Self {
            roof_area,
            roof_material: raw.roof_material,
            soil_type: raw.soil_type,
            annual_rainfall,
            monthly_rainfall,
            water_table_depth,
            storage_capacity,
            efficiency,
            soil_suitability,
            state: raw.state,
            recharge_requested: raw.recharge_requested,
        })
    }

    pub fn roof_area(&self) -> Area {
        self.roof_area
    }

    pub fn roof_material(&self) -> RoofMaterial {
        self.roof_material
    }

    pub fn soil_type(&self) -> SoilType {
        self.soil_type
    }

    pub fn annual_rainfall(&self) -> Length {
        self.annual_rainfall
    }

    /// January through December.
    pub fn monthly_rainfall(&self) -> &[Length; 12] {
        &self.monthly_rainfall
    }

    /// The wettest month's rainfall, used to size recharge structures.
    pub fn peak_monthly_rainfall(&self) -> Length {
        self.monthly_rainfall
            .iter()
            .copied()
            .fold(Length::new::<millimeter>(0.0), Length::max)
    }

    pub fn water_table_depth(&self) -> Length {
        self.water_table_depth
    }

    pub fn storage_capacity(&self) -> Volume {
        self.storage_capacity
    }

    pub fn efficiency(&self) -> Ratio {
        self.efficiency
    }

    /// Suitability rating from the soil provider, 0 through 10.
    pub fn soil_suitability(&self) -> f64 {
        self.soil_suitability
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn recharge_requested(&self) -> bool {
        self.recharge_requested
    }
}
