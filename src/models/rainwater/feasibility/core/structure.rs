//! Recharge structure sizing.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Volume},
    length::meter,
    volume::cubic_meter,
};

use super::{input::SiteInput, runoff::RunoffCoefficient};

/// Shallowest structure worth excavating.
const MIN_DEPTH_M: f64 = 3.0;

/// Deepest structure before shoring costs dominate.
const MAX_DEPTH_M: f64 = 8.0;

/// Fraction of the water table depth a structure may safely occupy.
const DEPTH_FRACTION: f64 = 0.6;

/// Sizing for a groundwater recharge structure.
///
/// The structure is sized to absorb the wettest month's runoff, so the
/// peak monthly rainfall drives the volume rather than the annual total.
#[derive(Debug, Clone, Copy)]
pub struct RechargeStructure {
    /// Storage volume of the structure.
    pub volume: Volume,

    /// Plan area of the filter bed.
    pub filter_bed_area: Area,

    /// Excavation depth, held between 3 and 8 meters.
    pub depth: Length,
}

impl RechargeStructure {
    /// Sizes a structure for the site's peak-month runoff.
    ///
    /// Volume is peak monthly rainfall times roof area times the runoff
    /// coefficient. The filter bed plan area and the depth follow the
    /// usual field sizing rules: half a square meter of bed per cubic
    /// meter of storage, and 60% of the water table depth clamped to a
    /// constructible range.
    pub fn size_for(input: &SiteInput, coefficient: RunoffCoefficient) -> Self {
        let volume = input.peak_monthly_rainfall() * input.roof_area() * *coefficient;

        // The bed-per-volume rule is numeric, not dimensional: m3 of
        // storage map to half as many m2 of bed.
        let filter_bed_area = Area::new::<square_meter>(volume.get::<cubic_meter>() / 2.0);

        let depth = Length::new::<meter>(
            (input.water_table_depth().get::<meter>() * DEPTH_FRACTION)
                .clamp(MIN_DEPTH_M, MAX_DEPTH_M),
        );

        Self {
            volume,
            filter_bed_area,
            depth,
        }
    }
}
