use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayFrequency;

/// A user-edited deduction line item. `id` is generated by the caller and
/// stays stable across edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomBenefit {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryInput {
    pub annual_salary: Decimal,
    pub pay_frequency: PayFrequency,
    /// Full jurisdiction name, e.g. `"New York"`.
    pub state: String,
    /// Overrides the frequency's period count when present and positive.
    #[serde(default)]
    pub pay_periods_per_year: Option<Decimal>,
    /// Carried for the presentation layer; the estimator never reads it.
    #[serde(default)]
    pub custom_benefits: Vec<CustomBenefit>,
}

impl SalaryInput {
    pub fn new(
        annual_salary: Decimal,
        pay_frequency: PayFrequency,
        state: impl Into<String>,
    ) -> Self {
        Self {
            annual_salary,
            pay_frequency,
            state: state.into(),
            pay_periods_per_year: None,
            custom_benefits: Vec::new(),
        }
    }

    pub fn with_pay_periods(
        mut self,
        periods: Decimal,
    ) -> Self {
        self.pay_periods_per_year = Some(periods);
        self
    }

    /// The custom period count, if one was supplied and is positive.
    pub fn custom_periods(&self) -> Option<Decimal> {
        self.pay_periods_per_year.filter(|p| *p > Decimal::ZERO)
    }

    pub fn custom_benefits_total(&self) -> Decimal {
        self.custom_benefits.iter().map(|b| b.amount).sum()
    }
}
