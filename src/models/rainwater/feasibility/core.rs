//! Feasibility assessment pipeline.
//!
//! Data flows one way through four stages: normalized inputs, runoff and
//! harvest figures, cost and financial figures, feasibility score. Each
//! stage is a pure function over the previous one; nothing here performs
//! I/O or holds mutable state between calls.

mod cost;
mod finance;
mod input;
mod lookup;
mod results;
mod runoff;
mod schemes;
mod score;
mod structure;

pub use cost::{CostComponents, CostConfig};
pub use finance::{ANALYSIS_HORIZON_YEARS, DISCOUNT_RATE, FinancialProjection, Payback};
pub use input::{InvalidInputError, RawSiteInput, RoofMaterial, SiteInput, SoilType};
pub use lookup::MissingLookupError;
pub use results::Assessment;
pub use runoff::{Harvest, RunoffCoefficient};
pub use schemes::{Scheme, StateSchemeTable};
pub use score::{FeasibilityResult, Score, ScoringFactor};
pub use structure::RechargeStructure;

/// Runs the full feasibility pipeline for one site.
///
/// Computes, in order: the runoff coefficient from the static roof and
/// soil tables, annual and monthly harvest volumes, recharge structure
/// sizing (when requested), the five-component cost breakdown, the
/// subsidy-adjusted financial projection, and the weighted feasibility
/// score.
///
/// # Errors
///
/// Returns a [`MissingLookupError`] if the roof material, soil type, or
/// the site's state has no entry in the corresponding static table. There
/// is no fallback entry; callers that want a default must supply it
/// themselves.
pub fn assess(
    input: &SiteInput,
    schemes: &StateSchemeTable,
    config: &CostConfig,
) -> Result<Assessment, MissingLookupError> {
    let runoff_coefficient = RunoffCoefficient::for_site(input.roof_material(), input.soil_type())?;
    let harvest = Harvest::for_site(input, runoff_coefficient);

    let recharge_structure = input
        .recharge_requested()
        .then(|| RechargeStructure::size_for(input, runoff_coefficient));

    let costs = CostComponents::estimate(input, recharge_structure.as_ref(), config);
    let scheme = schemes.lookup(input.state())?;
    let subsidy = scheme.subsidy(costs.total());
    let net_investment = costs.total() - subsidy;

    let projection = FinancialProjection::project(net_investment, costs.total(), &harvest, config);
    let feasibility = FeasibilityResult::evaluate(input, runoff_coefficient);

    Ok(Assessment {
        runoff_coefficient,
        harvest,
        recharge_structure,
        costs,
        subsidy,
        net_investment,
        projection,
        feasibility,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume::liter;

    fn raw_input() -> RawSiteInput {
        RawSiteInput {
            roof_area_m2: 100.0,
            roof_material: RoofMaterial::Concrete,
            soil_type: SoilType::Loamy,
            annual_rainfall_mm: 1200.0,
            monthly_rainfall_mm: [
                20.0, 15.0, 18.0, 35.0, 65.0, 150.0, 300.0, 280.0, 180.0, 95.0, 30.0, 12.0,
            ],
            water_table_depth_m: 8.5,
            storage_capacity_l: 5000.0,
            efficiency: None,
            soil_suitability: 8.0,
            state: "Tamil Nadu".into(),
            recharge_requested: true,
        }
    }

    #[test]
    fn pipeline_produces_the_reference_harvest() {
        let input = SiteInput::new(raw_input()).unwrap();
        let assessment = assess(
            &input,
            &StateSchemeTable::builtin(),
            &CostConfig::default(),
        )
        .unwrap();

        // 100 m2, concrete on loam (0.85 x 1.00), 1200 mm, default 0.85 efficiency.
        assert_relative_eq!(
            assessment.harvest.annual.get::<liter>(),
            86_700.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn composite_score_stays_in_range() {
        let input = SiteInput::new(raw_input()).unwrap();
        let assessment = assess(
            &input,
            &StateSchemeTable::builtin(),
            &CostConfig::default(),
        )
        .unwrap();

        let composite = assessment.feasibility.composite.value();
        assert!((0.0..=100.0).contains(&composite));
    }

    #[test]
    fn unknown_state_fails_the_scheme_lookup() {
        let mut raw = raw_input();
        raw.state = "Atlantis".into();
        let input = SiteInput::new(raw).unwrap();

        let err = assess(
            &input,
            &StateSchemeTable::builtin(),
            &CostConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, MissingLookupError::State { .. }));
    }

    #[test]
    fn recharge_structure_is_skipped_when_not_requested() {
        let mut raw = raw_input();
        raw.recharge_requested = false;
        let input = SiteInput::new(raw).unwrap();

        let assessment = assess(
            &input,
            &StateSchemeTable::builtin(),
            &CostConfig::default(),
        )
        .unwrap();

        assert!(assessment.recharge_structure.is_none());
        assert_eq!(assessment.costs.recharge, 0.0);
    }
}
