//! Runoff coefficient and harvested-volume calculation.

use std::ops::Deref;

use uom::si::{
    f64::{Length, Ratio, Volume},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, RangeBounds, WithinLowerOpen};

use super::{
    input::{RoofMaterial, SiteInput, SoilType},
    lookup::{self, MissingLookupError},
};

/// Admissible range for a combined runoff coefficient.
///
/// The product of the largest base coefficient and the largest soil
/// adjustment stays below 1.2, so anything past that indicates a corrupt
/// table rather than a wet site.
#[derive(Debug, Clone, Copy)]
struct CoefficientRange;

impl RangeBounds<Ratio> for CoefficientRange {
    fn lower() -> Ratio {
        Ratio::new::<ratio>(0.0)
    }
    fn upper() -> Ratio {
        Ratio::new::<ratio>(1.2)
    }
}

/// The fraction of rainfall on the roof that becomes collectible runoff.
///
/// Combined from the static roof material and soil adjustment tables.
/// Values above 1.0 are possible for favorable material and soil pairs;
/// the coefficient is deliberately not clamped to 1.0. This mirrors how
/// field handbooks tabulate the factors and is a modeling simplification,
/// not a defect.
#[derive(Debug, Clone, Copy)]
pub struct RunoffCoefficient(Constrained<Ratio, WithinLowerOpen<CoefficientRange>>);

impl RunoffCoefficient {
    /// Combines the base roof coefficient with the soil adjustment factor.
    ///
    /// # Errors
    ///
    /// Returns a [`MissingLookupError`] if either static table has no
    /// entry for the site's roof material or soil type.
    pub fn for_site(material: RoofMaterial, soil: SoilType) -> Result<Self, MissingLookupError> {
        let base = lookup::roof_coefficient(material)?;
        let adjustment = lookup::soil_adjustment(soil)?;
        let combined = Ratio::new::<ratio>(base * adjustment);

        Ok(Self(WithinLowerOpen::<CoefficientRange>::new(combined).expect(
            "table-derived runoff coefficients always lie in (0, 1.2]",
        )))
    }
}

impl Deref for RunoffCoefficient {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Harvested-water volumes for one site.
///
/// The monthly figures use each month's own rainfall and therefore need
/// not sum to the annual figure; annual and monthly rainfall are
/// independent measurements.
#[derive(Debug, Clone)]
pub struct Harvest {
    /// Volume harvested over a full year.
    pub annual: Volume,

    /// Volume harvested per month, January through December.
    pub monthly: [Volume; 12],
}

impl Harvest {
    /// Computes annual and monthly harvest volumes.
    ///
    /// Each volume is roof area times rainfall depth times the runoff
    /// coefficient times the system efficiency.
    pub fn for_site(input: &SiteInput, coefficient: RunoffCoefficient) -> Self {
        let collected = |rainfall: Length| -> Volume {
            input.roof_area() * rainfall * *coefficient * input.efficiency()
        };

        Self {
            annual: collected(input.annual_rainfall()),
            monthly: input.monthly_rainfall().map(collected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume::liter;

    use crate::models::rainwater::feasibility::core::input::RawSiteInput;

    fn site(material: RoofMaterial, soil: SoilType) -> SiteInput {
        SiteInput::new(RawSiteInput {
            roof_area_m2: 100.0,
            roof_material: material,
            soil_type: soil,
            annual_rainfall_mm: 1200.0,
            monthly_rainfall_mm: [100.0; 12],
            water_table_depth_m: 10.0,
            storage_capacity_l: 0.0,
            efficiency: None,
            soil_suitability: 7.0,
            state: "Karnataka".into(),
            recharge_requested: false,
        })
        .unwrap()
    }

    #[test]
    fn concrete_on_loam_is_the_base_coefficient() {
        let coefficient =
            RunoffCoefficient::for_site(RoofMaterial::Concrete, SoilType::Loamy).unwrap();
        assert_relative_eq!(coefficient.get::<ratio>(), 0.85);
    }

    #[test]
    fn rocky_soil_can_push_the_coefficient_close_to_one() {
        let coefficient =
            RunoffCoefficient::for_site(RoofMaterial::Metal, SoilType::Rocky).unwrap();
        assert_relative_eq!(coefficient.get::<ratio>(), 0.99, epsilon = 1e-12);
    }

    #[test]
    fn annual_harvest_matches_the_reference_figure() {
        let input = site(RoofMaterial::Concrete, SoilType::Loamy);
        let coefficient =
            RunoffCoefficient::for_site(input.roof_material(), input.soil_type()).unwrap();

        let harvest = Harvest::for_site(&input, coefficient);

        // 100 m2 x 1200 mm x 0.85 x 0.85 = 86 700 L
        assert_relative_eq!(harvest.annual.get::<liter>(), 86_700.0, epsilon = 1e-6);
    }

    #[test]
    fn monthly_harvest_uses_each_months_rainfall() {
        let input = site(RoofMaterial::Concrete, SoilType::Loamy);
        let coefficient =
            RunoffCoefficient::for_site(input.roof_material(), input.soil_type()).unwrap();

        let harvest = Harvest::for_site(&input, coefficient);

        for month in harvest.monthly {
            // 100 m2 x 100 mm x 0.85 x 0.85 = 7 225 L per month
            assert_relative_eq!(month.get::<liter>(), 7_225.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn harvest_volumes_are_never_negative() {
        for material in [RoofMaterial::Thatched, RoofMaterial::Metal] {
            for soil in [SoilType::Sandy, SoilType::Rocky] {
                let input = site(material, soil);
                let coefficient = RunoffCoefficient::for_site(material, soil).unwrap();
                let harvest = Harvest::for_site(&input, coefficient);

                assert!(harvest.annual.get::<liter>() >= 0.0);
                assert!(coefficient.get::<ratio>() > 0.0);
            }
        }
    }
}
