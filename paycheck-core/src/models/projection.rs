use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// 1-based position in the projection.
    pub month: u32,
    pub month_name: String,
    pub gross_pay: Decimal,
    pub net_pay: Decimal,
    pub taxes: Decimal,
    pub benefits: Decimal,
    pub cumulative_net: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualEarnings {
    pub annual_gross: Decimal,
    pub annual_net: Decimal,
    pub annual_taxes: Decimal,
    pub annual_benefits: Decimal,
    /// Percentage of gross, 0-100.
    pub tax_rate: Decimal,
    /// Percentage of gross, 0-100.
    pub take_home_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeoffComparison {
    pub scenario: String,
    pub monthly_net: Decimal,
    pub annual_net: Decimal,
    /// Difference from the baseline; `None` on the baseline itself.
    pub monthly_savings: Option<Decimal>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseAccumulation {
    pub month: u32,
    pub month_name: String,
    /// Cumulative expenses through this month.
    pub total_expenses: Decimal,
    /// Running balance, floored at zero.
    pub remaining_balance: Decimal,
    /// Percentage, floored at zero.
    pub savings_rate: Decimal,
}

/// One month of pay, stacked for a single-month chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSnapshot {
    pub gross: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub fica: Decimal,
    pub benefits: Decimal,
    pub expenses: Decimal,
    /// What remains after taxes, benefits and expenses, floored at zero.
    pub net: Decimal,
}
