//! Household water demand and harvest coverage.
//!
//! Answers the question the harvest figure alone cannot: how much of this
//! household's water use would the system actually cover? Demand is built
//! from per-capita norms and garden irrigation over the dry season.

use uom::si::{
    area::square_meter,
    f64::{Area, Length, Ratio, Volume},
    length::millimeter,
    ratio::ratio,
    volume::liter,
};

/// Drinking water need, liters per person per day.
const DRINKING_L_PER_PERSON_DAY: f64 = 5.0;

/// Domestic (washing, cooking, sanitation) need, liters per person per day.
const DOMESTIC_L_PER_PERSON_DAY: f64 = 100.0;

/// Garden irrigation need during dry months, liters per square meter per day.
const GARDEN_L_PER_M2_DAY: f64 = 5.0;

/// Days per year the garden needs irrigation.
const DRY_SEASON_DAYS: f64 = 180.0;

/// A month counts as dry below this rainfall.
const DRY_MONTH_THRESHOLD_MM: f64 = 30.0;

/// Household characteristics driving water demand.
#[derive(Debug, Clone, Copy)]
pub struct DemandInput {
    /// Number of people in the household.
    pub household_size: u32,

    /// Garden or irrigated area.
    pub garden_area: Area,
}

/// Annual demand breakdown and how much of it the harvest covers.
#[derive(Debug, Clone, Copy)]
pub struct DemandCoverage {
    /// Annual drinking water demand.
    pub drinking: Volume,

    /// Annual domestic demand.
    pub domestic: Volume,

    /// Annual garden irrigation demand.
    pub garden: Volume,

    /// Sum of the three demands.
    pub total: Volume,

    /// Fraction of total demand met by the harvest, capped at 1.0.
    /// `None` when total demand is zero, where coverage is undefined.
    pub coverage: Option<Ratio>,

    /// Months with rainfall below the dry threshold, 0 through 12.
    pub dry_months: usize,
}

/// Computes annual demand and harvest coverage for a household.
///
/// Coverage compares the annual harvest against total demand and is
/// capped at 1.0; harvesting more than the household uses does not mean
/// more than full coverage. A household of zero people with no garden has
/// no demand, and its coverage is reported as `None` rather than a
/// division by zero.
#[must_use]
pub fn coverage(
    demand: &DemandInput,
    annual_harvest: Volume,
    monthly_rainfall: &[Length; 12],
) -> DemandCoverage {
    let people = f64::from(demand.household_size);

    let drinking = Volume::new::<liter>(people * DRINKING_L_PER_PERSON_DAY * 365.0);
    let domestic = Volume::new::<liter>(people * DOMESTIC_L_PER_PERSON_DAY * 365.0);
    let garden = Volume::new::<liter>(
        demand.garden_area.get::<square_meter>() * GARDEN_L_PER_M2_DAY * DRY_SEASON_DAYS,
    );
    let total = drinking + domestic + garden;

    let coverage = (total.get::<liter>() > 0.0).then(|| {
        let fraction = (annual_harvest.get::<liter>() / total.get::<liter>()).min(1.0);
        Ratio::new::<ratio>(fraction)
    });

    let dry_months = monthly_rainfall
        .iter()
        .filter(|rain| rain.get::<millimeter>() < DRY_MONTH_THRESHOLD_MM)
        .count();

    DemandCoverage {
        drinking,
        domestic,
        garden,
        total,
        coverage,
        dry_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn monthly(mm: f64) -> [Length; 12] {
        [Length::new::<millimeter>(mm); 12]
    }

    #[test]
    fn demand_follows_the_per_capita_norms() {
        let input = DemandInput {
            household_size: 4,
            garden_area: Area::new::<square_meter>(50.0),
        };

        let result = coverage(&input, Volume::new::<liter>(0.0), &monthly(100.0));

        // 4 people x 5 L x 365 days.
        assert_relative_eq!(result.drinking.get::<liter>(), 7_300.0, epsilon = 1e-9);
        // 4 people x 100 L x 365 days.
        assert_relative_eq!(result.domestic.get::<liter>(), 146_000.0, epsilon = 1e-9);
        // 50 m2 x 5 L x 180 days.
        assert_relative_eq!(result.garden.get::<liter>(), 45_000.0, epsilon = 1e-9);
        assert_relative_eq!(result.total.get::<liter>(), 198_300.0, epsilon = 1e-9);
    }

    #[test]
    fn coverage_is_the_harvest_to_demand_fraction() {
        let input = DemandInput {
            household_size: 4,
            garden_area: Area::new::<square_meter>(0.0),
        };

        // Demand is 153 300 L; harvest half of it.
        let result = coverage(&input, Volume::new::<liter>(76_650.0), &monthly(100.0));

        assert_relative_eq!(result.coverage.unwrap().get::<ratio>(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn coverage_is_capped_at_full() {
        let input = DemandInput {
            household_size: 1,
            garden_area: Area::new::<square_meter>(0.0),
        };

        let result = coverage(&input, Volume::new::<liter>(1_000_000.0), &monthly(100.0));

        assert_relative_eq!(result.coverage.unwrap().get::<ratio>(), 1.0);
    }

    #[test]
    fn zero_demand_has_undefined_coverage() {
        let input = DemandInput {
            household_size: 0,
            garden_area: Area::new::<square_meter>(0.0),
        };

        let result = coverage(&input, Volume::new::<liter>(50_000.0), &monthly(100.0));

        assert!(result.coverage.is_none());
    }

    #[test]
    fn dry_months_counts_below_threshold() {
        let input = DemandInput {
            household_size: 4,
            garden_area: Area::new::<square_meter>(0.0),
        };

        let mut rainfall = monthly(100.0);
        rainfall[0] = Length::new::<millimeter>(10.0);
        rainfall[1] = Length::new::<millimeter>(29.9);
        rainfall[2] = Length::new::<millimeter>(30.0);

        let result = coverage(&input, Volume::new::<liter>(0.0), &rainfall);

        // Exactly the threshold does not count as dry.
        assert_eq!(result.dry_months, 2);
    }
}
