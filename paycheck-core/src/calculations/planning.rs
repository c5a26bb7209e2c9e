//! Projections built on top of a single paycheck estimate.
//!
//! Monthly figures use the averaged paychecks-per-month multipliers from
//! [`PayFrequency::periods_per_month`](crate::PayFrequency::periods_per_month),
//! annual figures use the standard periods-per-year counts. Month names run
//! forward from a start month, which defaults to the current local month.
//!
//! # Example
//!
//! ```
//! use chrono::Month;
//! use rust_decimal_macros::dec;
//! use paycheck_core::calculations::Planner;
//! use paycheck_core::{PayFrequency, SalaryInput, TaxTables};
//!
//! let input = SalaryInput::new(dec!(60000), PayFrequency::Monthly, "Texas");
//! let planner = Planner::new(TaxTables::builtin()).with_start_month(Month::November);
//!
//! let projections = planner.monthly_projections(&input, 3).unwrap();
//! let names: Vec<_> = projections.iter().map(|p| p.month_name.as_str()).collect();
//!
//! assert_eq!(names, ["Nov", "Dec", "Jan"]);
//! assert_eq!(projections[2].cumulative_net, dec!(10589.25));
//! ```

use chrono::{Datelike, Local, Month};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use super::common::{floor_at_zero, percent_of};
use super::paycheck::{EstimateError, PaycheckEstimator};
use super::tradeoffs::{BASELINE_DESCRIPTION, BASELINE_SCENARIO, TRADEOFF_SCENARIOS};
use crate::{
    AnnualEarnings, ExpenseAccumulation, MonthSnapshot, MonthlyProjection, PaycheckBreakdown,
    SalaryInput, TaxTables, TradeoffComparison,
};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Errors that can occur while building a plan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Estimate(#[from] EstimateError),

    /// The recurring monthly expense is negative.
    #[error("monthly expenses must not be negative, got {0}")]
    NegativeMonthlyExpenses(Decimal),
}

/// Builds projections, comparisons and schedules from paycheck estimates.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'a> {
    estimator: PaycheckEstimator<'a>,
    start_month: Month,
}

impl<'a> Planner<'a> {
    /// Creates a planner whose month names start at the current local month.
    pub fn new(tables: &'a TaxTables) -> Self {
        Self {
            estimator: PaycheckEstimator::new(tables),
            start_month: current_month(),
        }
    }

    pub fn with_start_month(
        mut self,
        month: Month,
    ) -> Self {
        self.start_month = month;
        self
    }

    pub fn start_month(&self) -> Month {
        self.start_month
    }

    pub fn estimator(&self) -> &PaycheckEstimator<'a> {
        &self.estimator
    }

    /// Projects `months` months of pay with a running total of net pay.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Estimate`] if the input cannot be estimated.
    pub fn monthly_projections(
        &self,
        input: &SalaryInput,
        months: u32,
    ) -> Result<Vec<MonthlyProjection>, PlanError> {
        let breakdown = self.estimator.estimate(input)?;
        let per_month = input.pay_frequency.periods_per_month();

        let gross_pay = breakdown.gross_pay * per_month;
        let net_pay = breakdown.take_home_pay * per_month;
        let taxes = breakdown.taxes.total * per_month;
        let benefits = breakdown.benefits.total * per_month;

        let mut cumulative_net = Decimal::ZERO;
        let projections = (0..months)
            .map(|offset| {
                cumulative_net += net_pay;
                MonthlyProjection {
                    month: offset + 1,
                    month_name: self.month_name(offset).to_string(),
                    gross_pay,
                    net_pay,
                    taxes,
                    benefits,
                    cumulative_net,
                }
            })
            .collect();

        debug!(months, %net_pay, "built monthly projections");
        Ok(projections)
    }

    /// Annualised totals and effective rates.
    ///
    /// `annual_gross` is the input salary as given; the other totals are
    /// per-paycheck amounts × the frequency's standard period count, so a
    /// custom period count only affects the per-paycheck figures.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Estimate`] if the input cannot be estimated.
    pub fn annual_earnings(
        &self,
        input: &SalaryInput,
    ) -> Result<AnnualEarnings, PlanError> {
        let breakdown = self.estimator.estimate(input)?;
        let periods = input.pay_frequency.periods_per_year();

        let annual_gross = input.annual_salary;
        let annual_net = breakdown.take_home_pay * periods;
        let annual_taxes = breakdown.taxes.total * periods;
        let annual_benefits = breakdown.benefits.total * periods;

        // The estimate above already rejected a non-positive salary.
        Ok(AnnualEarnings {
            annual_gross,
            annual_net,
            annual_taxes,
            annual_benefits,
            tax_rate: percent_of(annual_taxes, annual_gross).unwrap_or_default(),
            take_home_rate: percent_of(annual_net, annual_gross).unwrap_or_default(),
        })
    }

    /// The baseline followed by every entry of [`TRADEOFF_SCENARIOS`].
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Estimate`] if the input cannot be estimated.
    pub fn tradeoff_comparisons(
        &self,
        input: &SalaryInput,
    ) -> Result<Vec<TradeoffComparison>, PlanError> {
        let breakdown = self.estimator.estimate(input)?;
        let per_month = input.pay_frequency.periods_per_month();
        let baseline = breakdown.take_home_pay * per_month;
        let monthly_benefits = breakdown.benefits.total * per_month;

        let mut comparisons = Vec::with_capacity(TRADEOFF_SCENARIOS.len() + 1);
        comparisons.push(TradeoffComparison {
            scenario: BASELINE_SCENARIO.to_string(),
            monthly_net: baseline,
            annual_net: baseline * MONTHS_PER_YEAR,
            monthly_savings: None,
            description: BASELINE_DESCRIPTION.to_string(),
        });

        for scenario in &TRADEOFF_SCENARIOS {
            let monthly_net = baseline + scenario.adjustment.monthly_delta(baseline, monthly_benefits);
            comparisons.push(TradeoffComparison {
                scenario: scenario.name.to_string(),
                monthly_net,
                annual_net: monthly_net * MONTHS_PER_YEAR,
                monthly_savings: Some(monthly_net - baseline),
                description: scenario.description.to_string(),
            });
        }

        Ok(comparisons)
    }

    /// Running balance after a constant monthly expense.
    ///
    /// The balance starts at zero and gains `monthly net - monthly_expenses`
    /// each month. The exposed balance and savings rate are floored at zero;
    /// the underlying balance is not, so a deficit has to be earned back
    /// before the balance shows anything again. With no expenses the savings
    /// rate is 100.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::NegativeMonthlyExpenses`] for a negative expense
    /// and [`PlanError::Estimate`] if the input cannot be estimated.
    pub fn expense_accumulation(
        &self,
        input: &SalaryInput,
        monthly_expenses: Decimal,
        months: u32,
    ) -> Result<Vec<ExpenseAccumulation>, PlanError> {
        if monthly_expenses < Decimal::ZERO {
            return Err(PlanError::NegativeMonthlyExpenses(monthly_expenses));
        }

        let breakdown = self.estimator.estimate(input)?;
        let monthly_net = breakdown.take_home_pay * input.pay_frequency.periods_per_month();
        let savings_rate = savings_rate(monthly_net, monthly_expenses);

        let mut balance = Decimal::ZERO;
        let schedule = (0..months)
            .map(|offset| {
                balance += monthly_net - monthly_expenses;
                ExpenseAccumulation {
                    month: offset + 1,
                    month_name: self.month_name(offset).to_string(),
                    total_expenses: monthly_expenses * Decimal::from(offset + 1),
                    remaining_balance: floor_at_zero(balance),
                    savings_rate,
                }
            })
            .collect();

        Ok(schedule)
    }

    /// One month of pay stacked into taxes, benefits, expenses and what is
    /// left, using the calendar-exact `periods per year / 12` multiplier.
    ///
    /// # Errors
    ///
    /// Same as [`Planner::expense_accumulation`].
    pub fn month_snapshot(
        &self,
        input: &SalaryInput,
        monthly_expenses: Decimal,
    ) -> Result<MonthSnapshot, PlanError> {
        if monthly_expenses < Decimal::ZERO {
            return Err(PlanError::NegativeMonthlyExpenses(monthly_expenses));
        }

        let breakdown = self.estimator.estimate(input)?;
        let periods = self.estimator.periods_per_year(input);
        let monthly = |amount: Decimal| amount * periods / MONTHS_PER_YEAR;

        let gross = monthly(breakdown.gross_pay);
        let federal_tax = monthly(breakdown.taxes.federal);
        let state_tax = monthly(breakdown.taxes.state);
        let fica = monthly(breakdown.taxes.fica);
        let benefits = monthly(breakdown.benefits.total);

        Ok(MonthSnapshot {
            gross,
            federal_tax,
            state_tax,
            fica,
            benefits,
            expenses: monthly_expenses,
            net: floor_at_zero(gross - federal_tax - state_tax - fica - benefits - monthly_expenses),
        })
    }

    /// Estimates a single paycheck; see [`PaycheckEstimator::estimate`].
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Estimate`] if the input cannot be estimated.
    pub fn breakdown(
        &self,
        input: &SalaryInput,
    ) -> Result<PaycheckBreakdown, PlanError> {
        Ok(self.estimator.estimate(input)?)
    }

    fn month_name(
        &self,
        offset: u32,
    ) -> &'static str {
        let start = self.start_month.number_from_month() - 1;
        MONTH_NAMES[((start + offset) % 12) as usize]
    }
}

fn current_month() -> Month {
    u8::try_from(Local::now().month())
        .ok()
        .and_then(|number| Month::try_from(number).ok())
        .unwrap_or(Month::January)
}

fn savings_rate(
    monthly_net: Decimal,
    monthly_expenses: Decimal,
) -> Decimal {
    if monthly_expenses == Decimal::ZERO {
        return dec!(100);
    }
    if monthly_net <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    percent_of(monthly_net - monthly_expenses, monthly_net)
        .map(floor_at_zero)
        .unwrap_or_default()
}

/// [`Planner::monthly_projections`] with the built-in tables.
///
/// # Errors
///
/// See [`Planner::monthly_projections`].
pub fn calculate_monthly_projections(
    input: &SalaryInput,
    months: u32,
) -> Result<Vec<MonthlyProjection>, PlanError> {
    Planner::new(TaxTables::builtin()).monthly_projections(input, months)
}

/// [`Planner::annual_earnings`] with the built-in tables.
///
/// # Errors
///
/// See [`Planner::annual_earnings`].
pub fn calculate_annual_earnings(input: &SalaryInput) -> Result<AnnualEarnings, PlanError> {
    Planner::new(TaxTables::builtin()).annual_earnings(input)
}

/// [`Planner::tradeoff_comparisons`] with the built-in tables.
///
/// # Errors
///
/// See [`Planner::tradeoff_comparisons`].
pub fn calculate_tradeoff_comparisons(
    input: &SalaryInput,
) -> Result<Vec<TradeoffComparison>, PlanError> {
    Planner::new(TaxTables::builtin()).tradeoff_comparisons(input)
}

/// [`Planner::expense_accumulation`] with the built-in tables.
///
/// # Errors
///
/// See [`Planner::expense_accumulation`].
pub fn calculate_expense_accumulation(
    input: &SalaryInput,
    monthly_expenses: Decimal,
    months: u32,
) -> Result<Vec<ExpenseAccumulation>, PlanError> {
    Planner::new(TaxTables::builtin()).expense_accumulation(input, monthly_expenses, months)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::PayFrequency;

    fn planner() -> Planner<'static> {
        Planner::new(TaxTables::builtin()).with_start_month(Month::January)
    }

    fn texas_monthly() -> SalaryInput {
        SalaryInput::new(dec!(60000), PayFrequency::Monthly, "Texas")
    }

    fn texas_weekly() -> SalaryInput {
        SalaryInput::new(dec!(52000), PayFrequency::Weekly, "Texas")
    }

    // =========================================================================
    // monthly_projections tests
    // =========================================================================

    #[test]
    fn monthly_projections_returns_requested_length() {
        let projections = planner().monthly_projections(&texas_monthly(), 6).unwrap();

        assert_eq!(projections.len(), 6);
        assert_eq!(projections[0].month, 1);
        assert_eq!(projections[5].month, 6);
    }

    #[test]
    fn monthly_projections_zero_months_is_empty() {
        let projections = planner().monthly_projections(&texas_monthly(), 0).unwrap();

        assert!(projections.is_empty());
    }

    #[test]
    fn monthly_projections_accumulate_net() {
        let projections = planner().monthly_projections(&texas_monthly(), 3).unwrap();

        assert_eq!(projections[0].net_pay, dec!(3529.75));
        assert_eq!(projections[0].cumulative_net, dec!(3529.75));
        assert_eq!(projections[1].cumulative_net, dec!(7059.50));
        assert_eq!(projections[2].cumulative_net, dec!(10589.25));
    }

    #[test]
    fn monthly_projections_use_averaged_weekly_multiplier() {
        let projections = planner().monthly_projections(&texas_weekly(), 1).unwrap();

        // 1000 per week * 4.33
        assert_eq!(projections[0].gross_pay, dec!(4330));
    }

    #[test]
    fn monthly_projections_month_names_wrap_around_year_end() {
        let projections = Planner::new(TaxTables::builtin())
            .with_start_month(Month::October)
            .monthly_projections(&texas_monthly(), 5)
            .unwrap();
        let names: Vec<_> = projections.iter().map(|p| p.month_name.as_str()).collect();

        assert_eq!(names, ["Oct", "Nov", "Dec", "Jan", "Feb"]);
    }

    #[test]
    fn monthly_projections_propagate_estimate_errors() {
        let input = SalaryInput::new(dec!(0), PayFrequency::Monthly, "Texas");

        let result = planner().monthly_projections(&input, 3);

        assert_eq!(
            result,
            Err(PlanError::Estimate(EstimateError::NonPositiveSalary(dec!(0))))
        );
    }

    // =========================================================================
    // annual_earnings tests
    // =========================================================================

    #[test]
    fn annual_earnings_for_worked_example() {
        let earnings = planner().annual_earnings(&texas_monthly()).unwrap();

        assert_eq!(earnings.annual_gross, dec!(60000));
        assert_eq!(earnings.annual_net, dec!(42357));
        assert_eq!(earnings.annual_taxes, dec!(12843));
        assert_eq!(earnings.annual_benefits, dec!(4800));
        assert_eq!(earnings.tax_rate, dec!(21.405));
        assert_eq!(earnings.take_home_rate, dec!(70.595));
    }

    #[test]
    fn annual_earnings_gross_passes_salary_through_with_custom_periods() {
        let input = texas_monthly().with_pay_periods(dec!(10));

        let earnings = planner().annual_earnings(&input).unwrap();

        // Per-paycheck amounts come from 10 periods, totals from 12.
        assert_eq!(earnings.annual_gross, dec!(60000));
        assert_eq!(earnings.annual_benefits, dec!(5760));
    }

    // =========================================================================
    // tradeoff_comparisons tests
    // =========================================================================

    #[test]
    fn tradeoff_comparisons_start_with_baseline() {
        let comparisons = planner().tradeoff_comparisons(&texas_monthly()).unwrap();

        assert_eq!(comparisons.len(), TRADEOFF_SCENARIOS.len() + 1);
        assert_eq!(comparisons[0].scenario, "Current");
        assert_eq!(comparisons[0].monthly_net, dec!(3529.75));
        assert_eq!(comparisons[0].annual_net, dec!(42357));
        assert_eq!(comparisons[0].monthly_savings, None);
    }

    #[test]
    fn tradeoff_comparisons_apply_each_adjustment() {
        let comparisons = planner().tradeoff_comparisons(&texas_monthly()).unwrap();
        let savings: Vec<_> = comparisons
            .iter()
            .skip(1)
            .map(|c| (c.scenario.as_str(), c.monthly_savings))
            .collect();

        assert_eq!(
            savings,
            vec![
                ("With Roommates", Some(dec!(882.4375))),
                ("Public Transit Instead of Car", Some(dec!(470))),
                ("Cook at Home", Some(dec!(450))),
                ("Suburban Apartment", Some(dec!(800))),
                ("Minimal Benefits", Some(dec!(200))),
                ("Selective Subscriptions", Some(dec!(135))),
                ("Quality Basics & Thrifting", Some(dec!(120))),
                ("Aggressive Savings", Some(dec!(-352.975))),
            ]
        );
    }

    #[test]
    fn tradeoff_comparisons_annual_is_twelve_months() {
        let comparisons = planner().tradeoff_comparisons(&texas_weekly()).unwrap();

        for comparison in &comparisons {
            assert_eq!(comparison.annual_net, comparison.monthly_net * dec!(12));
        }
    }

    // =========================================================================
    // expense_accumulation tests
    // =========================================================================

    #[test]
    fn expense_accumulation_tracks_running_balance() {
        let schedule = planner()
            .expense_accumulation(&texas_monthly(), dec!(2529.75), 3)
            .unwrap();

        assert_eq!(schedule[0].total_expenses, dec!(2529.75));
        assert_eq!(schedule[2].total_expenses, dec!(7589.25));
        assert_eq!(schedule[0].remaining_balance, dec!(1000));
        assert_eq!(schedule[2].remaining_balance, dec!(3000));
    }

    #[test]
    fn expense_accumulation_savings_rate() {
        let schedule = planner()
            .expense_accumulation(&texas_monthly(), dec!(2823.80), 1)
            .unwrap();

        // (3529.75 - 2823.80) / 3529.75 = 20%
        assert_eq!(schedule[0].savings_rate, dec!(20));
    }

    #[test]
    fn expense_accumulation_without_expenses_saves_everything() {
        let schedule = planner()
            .expense_accumulation(&texas_monthly(), dec!(0), 2)
            .unwrap();

        assert_eq!(schedule[0].savings_rate, dec!(100));
        assert_eq!(schedule[1].remaining_balance, dec!(7059.50));
        assert_eq!(schedule[1].total_expenses, dec!(0));
    }

    #[test]
    fn expense_accumulation_floors_deficits() {
        let schedule = planner()
            .expense_accumulation(&texas_monthly(), dec!(10000), 4)
            .unwrap();

        for entry in &schedule {
            assert_eq!(entry.remaining_balance, dec!(0));
            assert_eq!(entry.savings_rate, dec!(0));
        }
    }

    #[test]
    fn expense_accumulation_rejects_negative_expenses() {
        let result = planner().expense_accumulation(&texas_monthly(), dec!(-1), 3);

        assert_eq!(result, Err(PlanError::NegativeMonthlyExpenses(dec!(-1))));
    }

    #[test]
    fn savings_rate_is_zero_when_net_is_not_positive() {
        assert_eq!(savings_rate(dec!(0), dec!(100)), dec!(0));
        assert_eq!(savings_rate(dec!(-50), dec!(100)), dec!(0));
    }

    // =========================================================================
    // month_snapshot tests
    // =========================================================================

    #[test]
    fn month_snapshot_stacks_deductions() {
        let snapshot = planner()
            .month_snapshot(&texas_monthly(), dec!(1500))
            .unwrap();

        assert_eq!(snapshot.gross, dec!(5000));
        assert_eq!(snapshot.federal_tax, dec!(687.75));
        assert_eq!(snapshot.state_tax, dec!(0));
        assert_eq!(snapshot.fica, dec!(382.50));
        assert_eq!(snapshot.benefits, dec!(400));
        assert_eq!(snapshot.expenses, dec!(1500));
        assert_eq!(snapshot.net, dec!(2029.75));
    }

    #[test]
    fn month_snapshot_uses_calendar_exact_multiplier() {
        let snapshot = planner().month_snapshot(&texas_weekly(), dec!(0)).unwrap();

        // 1000 * 52 / 12, not 1000 * 4.33
        assert_eq!(snapshot.gross, dec!(52000) / dec!(12));
    }

    #[test]
    fn month_snapshot_floors_net() {
        let snapshot = planner()
            .month_snapshot(&texas_monthly(), dec!(9000))
            .unwrap();

        assert_eq!(snapshot.net, dec!(0));
    }
}
