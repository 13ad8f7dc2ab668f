//! Financial projection: savings, payback, and net present value.

#[cfg(feature = "serde")]
use serde::Serialize;
use uom::si::volume::liter;

use super::{cost::CostConfig, runoff::Harvest};

/// Length of the analysis window in years.
pub const ANALYSIS_HORIZON_YEARS: usize = 20;

/// Annual discount rate applied to future benefits.
pub const DISCOUNT_RATE: f64 = 0.08;

/// Years until cumulative net benefit equals the net investment.
///
/// A system whose upkeep costs as much as it saves never pays for
/// itself. That is a legitimate outcome of the analysis, not a failure,
/// so it is a variant here rather than an error or an infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Payback {
    /// The investment is recovered after this many years.
    Years(f64),

    /// Net annual benefit is zero or negative; the investment is never
    /// recovered.
    NotRecoverable,
}

impl Payback {
    /// The recovery time, if the investment is recoverable.
    #[must_use]
    pub fn years(&self) -> Option<f64> {
        match self {
            Self::Years(years) => Some(*years),
            Self::NotRecoverable => None,
        }
    }

    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Years(_))
    }
}

/// A 20-year projection of costs and benefits.
///
/// The benefit stream is flat: the same net annual benefit is assumed for
/// every year of the window, with no tariff growth or system degradation
/// modeled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FinancialProjection {
    /// Value of the harvested water per year, in rupees.
    pub annual_savings: f64,

    /// Upkeep cost per year, in rupees.
    pub annual_maintenance: f64,

    /// Net benefit for each year of the window, in order.
    pub net_annual_benefits: [f64; ANALYSIS_HORIZON_YEARS],

    /// Net present value of the benefit stream minus the net investment.
    pub npv: f64,

    /// Simple payback period against the net investment.
    pub payback: Payback,
}

impl FinancialProjection {
    /// Projects savings, payback, and NPV for one site.
    ///
    /// Savings value the annual harvest at the configured tariff;
    /// maintenance is a fraction of the total capital cost. The subsidy
    /// affects only the net investment, not the running figures.
    pub fn project(
        net_investment: f64,
        total_cost: f64,
        harvest: &Harvest,
        config: &CostConfig,
    ) -> Self {
        let annual_savings = harvest.annual.get::<liter>() * config.water_tariff_per_l;
        let annual_maintenance = total_cost * config.maintenance_rate;
        let net_annual_benefit = annual_savings - annual_maintenance;

        let net_annual_benefits = [net_annual_benefit; ANALYSIS_HORIZON_YEARS];

        let discounted: f64 = net_annual_benefits
            .iter()
            .enumerate()
            .map(|(index, benefit)| {
                let year = (index + 1) as i32;
                benefit / (1.0 + DISCOUNT_RATE).powi(year)
            })
            .sum();
        let npv = discounted - net_investment;

        let payback = if net_annual_benefit > 0.0 {
            Payback::Years(net_investment / net_annual_benefit)
        } else {
            Payback::NotRecoverable
        };

        Self {
            annual_savings,
            annual_maintenance,
            net_annual_benefits,
            npv,
            payback,
        }
    }
}
