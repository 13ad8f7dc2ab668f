//! Environmental impact of displacing municipal supply.
//!
//! Every cubic meter harvested is one that does not have to be treated
//! and pumped through the municipal network, so the impact figures are
//! linear in the annual harvest.

use uom::si::{
    energy::kilowatt_hour,
    f64::{Energy, Mass, Volume},
    mass::kilogram,
    volume::cubic_meter,
};

/// Treatment and distribution energy per cubic meter of municipal water.
const ENERGY_KWH_PER_M3: f64 = 3.5;

/// Grid emission factor, kilograms of CO2 per kilowatt hour.
const CO2_KG_PER_KWH: f64 = 0.4;

/// Annual CO2 uptake of an average mature tree, in kilograms.
const CO2_KG_PER_TREE_YEAR: f64 = 22.0;

/// Annual environmental benefit of a harvesting system.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentalImpact {
    /// Municipal treatment and pumping energy displaced per year.
    pub energy_saved: Energy,

    /// CO2 emissions avoided per year.
    pub co2_avoided: Mass,

    /// Number of mature trees with the same annual CO2 uptake.
    pub equivalent_trees: f64,
}

impl EnvironmentalImpact {
    /// Derives the impact figures from an annual harvest volume.
    #[must_use]
    pub fn from_annual_harvest(annual_harvest: Volume) -> Self {
        let energy_kwh = annual_harvest.get::<cubic_meter>() * ENERGY_KWH_PER_M3;
        let co2_kg = energy_kwh * CO2_KG_PER_KWH;

        Self {
            energy_saved: Energy::new::<kilowatt_hour>(energy_kwh),
            co2_avoided: Mass::new::<kilogram>(co2_kg),
            equivalent_trees: co2_kg / CO2_KG_PER_TREE_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume::liter;

    #[test]
    fn impact_is_linear_in_the_harvest() {
        let impact = EnvironmentalImpact::from_annual_harvest(Volume::new::<liter>(100_000.0));

        // 100 m3 x 3.5 kWh.
        assert_relative_eq!(impact.energy_saved.get::<kilowatt_hour>(), 350.0, epsilon = 1e-9);
        // 350 kWh x 0.4 kg.
        assert_relative_eq!(impact.co2_avoided.get::<kilogram>(), 140.0, epsilon = 1e-9);
        assert_relative_eq!(impact.equivalent_trees, 140.0 / 22.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_harvest_has_zero_impact() {
        let impact = EnvironmentalImpact::from_annual_harvest(Volume::new::<liter>(0.0));

        assert_relative_eq!(impact.energy_saved.get::<kilowatt_hour>(), 0.0);
        assert_relative_eq!(impact.co2_avoided.get::<kilogram>(), 0.0);
        assert_relative_eq!(impact.equivalent_trees, 0.0);
    }
}
