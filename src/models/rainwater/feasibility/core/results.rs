//! Combined result of a feasibility assessment.

use super::{
    cost::CostComponents,
    finance::FinancialProjection,
    runoff::{Harvest, RunoffCoefficient},
    score::FeasibilityResult,
    structure::RechargeStructure,
};

/// Everything [`assess`](super::assess) computes for one site.
///
/// Monetary figures are rupees. The subsidy is already reflected in the
/// net investment; the cost components themselves are pre-subsidy.
#[derive(Debug, Clone)]
pub struct Assessment {
    /// Combined runoff coefficient used throughout the pipeline.
    pub runoff_coefficient: RunoffCoefficient,

    /// Annual and monthly harvested volumes.
    pub harvest: Harvest,

    /// Recharge structure sizing; `None` when not requested.
    pub recharge_structure: Option<RechargeStructure>,

    /// Capital cost breakdown, pre-subsidy.
    pub costs: CostComponents,

    /// Subsidy granted by the state scheme.
    pub subsidy: f64,

    /// Total cost minus subsidy.
    pub net_investment: f64,

    /// 20-year savings, payback, and NPV.
    pub projection: FinancialProjection,

    /// Sub-scores and composite feasibility.
    pub feasibility: FeasibilityResult,
}
