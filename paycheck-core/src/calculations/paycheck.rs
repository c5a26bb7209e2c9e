//! Paycheck estimation.
//!
//! Converts an annual salary into a single paycheck's gross pay, taxes,
//! benefit deductions and take-home pay.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross pay: annual salary / periods per year (custom count wins when positive) |
//! | 2    | Federal tax: progressive annual tax on the salary, prorated by gross / salary |
//! | 3    | State tax: gross pay × flat state rate |
//! | 4    | FICA: gross pay × (social security rate + medicare rate) |
//! | 5    | Benefits: gross pay × health insurance rate, gross pay × retirement rate |
//! | 6    | Take-home: gross pay - total taxes - total benefits |
//!
//! Social security is all-or-nothing: it applies in full while the annual
//! salary is at or below the wage base and drops to zero above it. There is
//! no mid-year proration.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycheck_core::calculations::PaycheckEstimator;
//! use paycheck_core::{PayFrequency, SalaryInput, TaxTables};
//!
//! let input = SalaryInput::new(dec!(60000), PayFrequency::Monthly, "Texas");
//!
//! let estimator = PaycheckEstimator::new(TaxTables::builtin());
//! let breakdown = estimator.estimate(&input).unwrap();
//!
//! assert_eq!(breakdown.gross_pay, dec!(5000));
//! assert_eq!(breakdown.taxes.federal, dec!(687.75));
//! assert_eq!(breakdown.taxes.fica, dec!(382.50));
//! assert_eq!(breakdown.benefits.total, dec!(400));
//! assert_eq!(breakdown.take_home_pay, dec!(3529.75));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

use crate::{
    BenefitBreakdown, PayFrequency, PaycheckBreakdown, SalaryInput, TaxBreakdown, TaxTables,
};

/// Errors that can occur while estimating a paycheck.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// The annual salary is zero or negative.
    #[error("annual salary must be positive, got {0}")]
    NonPositiveSalary(Decimal),
}

/// Estimates a single paycheck against a set of tax tables.
#[derive(Debug, Clone, Copy)]
pub struct PaycheckEstimator<'a> {
    tables: &'a TaxTables,
}

impl<'a> PaycheckEstimator<'a> {
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }

    /// Estimates one paycheck for `input`.
    ///
    /// `input.custom_benefits` is not read; the benefit lines are always
    /// the configured percentage estimates.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::NonPositiveSalary`] if the annual salary is
    /// zero or negative.
    pub fn estimate(
        &self,
        input: &SalaryInput,
    ) -> Result<PaycheckBreakdown, EstimateError> {
        let salary = input.annual_salary;
        if salary <= Decimal::ZERO {
            return Err(EstimateError::NonPositiveSalary(salary));
        }

        let gross_pay = salary / self.periods_per_year(input);

        let taxes = TaxBreakdown::new(
            self.federal_tax(gross_pay, salary),
            self.state_tax(gross_pay, &input.state),
            self.fica(gross_pay, salary),
        );
        let benefits = self.benefits(gross_pay);

        let breakdown = PaycheckBreakdown::new(gross_pay, taxes, benefits);
        trace!(
            %salary,
            frequency = %input.pay_frequency,
            state = %input.state,
            take_home = %breakdown.take_home_pay,
            "estimated paycheck"
        );

        Ok(breakdown)
    }

    /// Paychecks per year: the custom count when positive, otherwise the
    /// frequency's standard count.
    pub fn periods_per_year(
        &self,
        input: &SalaryInput,
    ) -> Decimal {
        input
            .custom_periods()
            .unwrap_or_else(|| input.pay_frequency.periods_per_year())
    }

    /// Annual federal tax prorated to this paycheck by `gross_pay / salary`.
    fn federal_tax(
        &self,
        gross_pay: Decimal,
        salary: Decimal,
    ) -> Decimal {
        let annual_tax = self.tables.annual_federal_tax(salary);
        // Multiplying first keeps whole-period ratios exact (8253 * 5000 / 60000).
        match annual_tax.checked_mul(gross_pay) {
            Some(product) => product / salary,
            None => annual_tax * (gross_pay / salary),
        }
    }

    fn state_tax(
        &self,
        gross_pay: Decimal,
        state: &str,
    ) -> Decimal {
        gross_pay * self.tables.state_rate(state)
    }

    fn social_security_rate(
        &self,
        salary: Decimal,
    ) -> Decimal {
        let config = self.tables.config();
        if salary <= config.ss_wage_base {
            config.ss_tax_rate
        } else {
            Decimal::ZERO
        }
    }

    fn fica(
        &self,
        gross_pay: Decimal,
        salary: Decimal,
    ) -> Decimal {
        gross_pay * (self.social_security_rate(salary) + self.tables.config().medicare_tax_rate)
    }

    fn benefits(
        &self,
        gross_pay: Decimal,
    ) -> BenefitBreakdown {
        let config = self.tables.config();
        BenefitBreakdown::new(
            gross_pay * config.health_insurance_rate,
            gross_pay * config.retirement_rate,
            Decimal::ZERO,
        )
    }
}

/// Estimates a paycheck against the built-in 2024 tables.
///
/// # Errors
///
/// See [`PaycheckEstimator::estimate`].
pub fn estimate_take_home(input: &SalaryInput) -> Result<PaycheckBreakdown, EstimateError> {
    PaycheckEstimator::new(TaxTables::builtin()).estimate(input)
}

/// Scales a per-paycheck amount to a year using the frequency's standard
/// period count (12 for `Other`).
pub fn annualize_take_home(
    per_check: Decimal,
    frequency: PayFrequency,
) -> Decimal {
    per_check * frequency.periods_per_year()
}
