//! Capital cost estimation.
//!
//! All amounts are rupees. Rates that vary by installer or market sit in
//! [`CostConfig`]; rates that describe the standard system package are
//! module constants so the whole price list is visible in one place.

#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::{
    area::square_meter,
    volume::{cubic_meter, liter},
};

use super::{input::SiteInput, structure::RechargeStructure};

// Collection system: gutters and downpipes are priced per square meter of
// roof, the storage tank per liter of capacity, plus two fixed items.
const GUTTER_RATE_PER_M2: f64 = 150.0;
const FIRST_FLUSH_DIVERTER: f64 = 15_000.0;
const LEAF_SCREENS: f64 = 8_000.0;
const STORAGE_RATE_PER_L: f64 = 25.0;

// Standard treatment package, independent of site size.
const SAND_FILTER: f64 = 12_000.0;
const CARBON_FILTER: f64 = 18_000.0;
const UV_STERILIZER: f64 = 25_000.0;

// Recharge works, per cubic meter of structure volume.
const EXCAVATION_RATE_PER_M3: f64 = 80.0;
const FILTER_MEDIA_RATE_PER_M3: f64 = 120.0;
const PIPING_RATE_PER_M3: f64 = 60.0;
const STRUCTURE_RATE_PER_M3: f64 = 200.0;

/// Contingency margin over the other four components.
const CONTINGENCY_RATE: f64 = 0.10;

/// Market-dependent rates for cost and benefit estimation.
#[derive(Debug, Clone, Copy)]
pub struct CostConfig {
    /// Labor, electrical, testing, and permit work as a fraction of the
    /// collection, treatment, and recharge subtotal.
    pub installation_rate: f64,

    /// Annual upkeep as a fraction of the total capital cost.
    pub maintenance_rate: f64,

    /// Water price in rupees per liter, used to value the harvest.
    pub water_tariff_per_l: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            installation_rate: 0.12,
            maintenance_rate: 0.02,
            water_tariff_per_l: 0.05,
        }
    }
}

/// Capital cost breakdown in rupees.
///
/// The five components are each non-negative; the total is their sum and
/// the contingency is always 10% of the other four, so recomputing from
/// the same input yields identical figures.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CostComponents {
    /// Gutters, downpipes, screens, diverter, and storage tank.
    pub collection: f64,

    /// Standard filtration and sterilization package.
    pub treatment: f64,

    /// Recharge works; zero when no structure is requested.
    pub recharge: f64,

    /// Labor, electrical, testing, and permits.
    pub installation: f64,

    /// Margin over the other four components.
    pub contingency: f64,
}

impl CostComponents {
    /// Prices the system for a site.
    ///
    /// Passing `None` for the structure drops the recharge component to
    /// zero; the installation and contingency percentages then apply to
    /// the remaining subtotal.
    pub fn estimate(
        input: &SiteInput,
        structure: Option<&RechargeStructure>,
        config: &CostConfig,
    ) -> Self {
        let collection = input.roof_area().get::<square_meter>() * GUTTER_RATE_PER_M2
            + FIRST_FLUSH_DIVERTER
            + LEAF_SCREENS
            + input.storage_capacity().get::<liter>() * STORAGE_RATE_PER_L;

        let treatment = SAND_FILTER + CARBON_FILTER + UV_STERILIZER;

        let recharge = structure.map_or(0.0, |structure| {
            let volume = structure.volume.get::<cubic_meter>();
            volume
                * (EXCAVATION_RATE_PER_M3
                    + FILTER_MEDIA_RATE_PER_M3
                    + PIPING_RATE_PER_M3
                    + STRUCTURE_RATE_PER_M3)
        });

        let installation = config.installation_rate * (collection + treatment + recharge);
        let contingency = CONTINGENCY_RATE * (collection + treatment + recharge + installation);

        Self {
            collection,
            treatment,
            recharge,
            installation,
            contingency,
        }
    }

    /// Sum of all five components.
    pub fn total(&self) -> f64 {
        self.collection + self.treatment + self.recharge + self.installation + self.contingency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::rainwater::feasibility::core::{
        input::{RawSiteInput, RoofMaterial, SoilType},
        runoff::RunoffCoefficient,
    };

    fn site() -> SiteInput {
        SiteInput::new(RawSiteInput {
            roof_area_m2: 100.0,
            roof_material: RoofMaterial::Concrete,
            soil_type: SoilType::Loamy,
            annual_rainfall_mm: 1200.0,
            monthly_rainfall_mm: [100.0; 12],
            water_table_depth_m: 10.0,
            storage_capacity_l: 2000.0,
            efficiency: None,
            soil_suitability: 7.0,
            state: "Karnataka".into(),
            recharge_requested: false,
        })
        .unwrap()
    }

    #[test]
    fn collection_prices_roof_and_storage() {
        let costs = CostComponents::estimate(&site(), None, &CostConfig::default());

        // 100 m2 x 150 + 15000 + 8000 + 2000 L x 25 = 88 000
        assert_relative_eq!(costs.collection, 88_000.0, epsilon = 1e-9);
        assert_relative_eq!(costs.treatment, 55_000.0);
        assert_relative_eq!(costs.recharge, 0.0);
    }

    #[test]
    fn total_is_the_sum_of_the_five_components() {
        let costs = CostComponents::estimate(&site(), None, &CostConfig::default());

        let summed = costs.collection
            + costs.treatment
            + costs.recharge
            + costs.installation
            + costs.contingency;
        assert_relative_eq!(costs.total(), summed);
    }

    #[test]
    fn contingency_is_ten_percent_of_the_rest() {
        let input = site();
        let coefficient =
            RunoffCoefficient::for_site(input.roof_material(), input.soil_type()).unwrap();
        let structure = RechargeStructure::size_for(&input, coefficient);

        let costs = CostComponents::estimate(&input, Some(&structure), &CostConfig::default());

        assert_relative_eq!(
            costs.contingency,
            0.10 * (costs.collection + costs.treatment + costs.recharge + costs.installation),
            epsilon = 1e-9
        );
    }

    #[test]
    fn estimation_is_idempotent() {
        let input = site();
        let config = CostConfig::default();

        let first = CostComponents::estimate(&input, None, &config);
        let second = CostComponents::estimate(&input, None, &config);

        assert_eq!(first, second);
        assert_relative_eq!(first.total(), second.total());
    }

    #[test]
    fn installation_rate_is_configurable() {
        let config = CostConfig {
            installation_rate: 0.20,
            ..CostConfig::default()
        };

        let costs = CostComponents::estimate(&site(), None, &config);

        assert_relative_eq!(
            costs.installation,
            0.20 * (costs.collection + costs.treatment),
            epsilon = 1e-9
        );
    }
}
