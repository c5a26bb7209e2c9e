//! Lifestyle tradeoff scenarios.
//!
//! Each scenario adjusts the baseline monthly take-home by a fixed rule.
//! The dollar figures are flat national assumptions and are not scaled to
//! the user's income or location.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Name of the baseline entry that every comparison list starts with.
pub const BASELINE_SCENARIO: &str = "Current";

pub const BASELINE_DESCRIPTION: &str = "Your current take-home pay";

/// How a scenario changes the baseline monthly net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScenarioAdjustment {
    /// Adds `share × monthly net`. Negative shares set money aside.
    ShareOfNet(Decimal),
    /// Adds back `share × monthly benefit deductions`.
    ShareOfBenefits(Decimal),
    /// Replaces a monthly cost with a cheaper alternative.
    CostSwap { current: Decimal, alternative: Decimal },
}

impl ScenarioAdjustment {
    /// Change to the monthly net this adjustment produces.
    pub fn monthly_delta(
        &self,
        monthly_net: Decimal,
        monthly_benefits: Decimal,
    ) -> Decimal {
        match *self {
            Self::ShareOfNet(share) => monthly_net * share,
            Self::ShareOfBenefits(share) => monthly_benefits * share,
            Self::CostSwap {
                current,
                alternative,
            } => current - alternative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TradeoffScenario {
    pub name: &'static str,
    pub description: &'static str,
    pub adjustment: ScenarioAdjustment,
}

/// Scenarios compared against the baseline, in display order.
pub const TRADEOFF_SCENARIOS: [TradeoffScenario; 8] = [
    TradeoffScenario {
        name: "With Roommates",
        description: "Save on housing costs",
        adjustment: ScenarioAdjustment::ShareOfNet(dec!(0.25)),
    },
    TradeoffScenario {
        name: "Public Transit Instead of Car",
        description: "Monthly transit pass and occasional rideshare instead of a car loan, insurance and gas",
        adjustment: ScenarioAdjustment::CostSwap {
            current: dec!(650),
            alternative: dec!(180),
        },
    },
    TradeoffScenario {
        name: "Cook at Home",
        description: "Home cooking with occasional takeout instead of restaurants 4-5 times a week",
        adjustment: ScenarioAdjustment::CostSwap {
            current: dec!(800),
            alternative: dec!(350),
        },
    },
    TradeoffScenario {
        name: "Suburban Apartment",
        description: "2-bedroom 20 minutes from the city instead of a downtown 1-bedroom",
        adjustment: ScenarioAdjustment::CostSwap {
            current: dec!(2200),
            alternative: dec!(1400),
        },
    },
    TradeoffScenario {
        name: "Minimal Benefits",
        description: "Lower benefit deductions",
        adjustment: ScenarioAdjustment::ShareOfBenefits(dec!(0.5)),
    },
    TradeoffScenario {
        name: "Selective Subscriptions",
        description: "One streaming service and free content instead of several services and events",
        adjustment: ScenarioAdjustment::CostSwap {
            current: dec!(180),
            alternative: dec!(45),
        },
    },
    TradeoffScenario {
        name: "Quality Basics & Thrifting",
        description: "Fewer, longer-lasting clothes instead of fast fashion",
        adjustment: ScenarioAdjustment::CostSwap {
            current: dec!(200),
            alternative: dec!(80),
        },
    },
    TradeoffScenario {
        name: "Aggressive Savings",
        description: "Save 10% more monthly",
        adjustment: ScenarioAdjustment::ShareOfNet(dec!(-0.10)),
    },
];
