//! Text and JSON rendering of estimator and planner results.
//!
//! Every report implements both [`Display`] (aligned text, amounts rounded
//! to cents) and [`Serialize`] (unrounded decimals as strings).

use std::fmt::{self, Display, Formatter};

use clap::ValueEnum;
use paycheck_core::{
    AnnualEarnings, ExpenseAccumulation, MonthSnapshot, MonthlyProjection, PaycheckBreakdown,
    SalaryInput, TradeoffComparison,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::profile::ExpenseItem;
use crate::utils::{format_currency, format_percent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Renders a report in the requested format. JSON is pretty-printed and
/// newline-terminated.
pub fn render<R>(
    report: &R,
    format: OutputFormat,
) -> serde_json::Result<String>
where
    R: Display + Serialize,
{
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(report).map(|json| json + "\n"),
    }
}

const LABEL_WIDTH: usize = 22;
const AMOUNT_WIDTH: usize = 14;

fn line(
    f: &mut Formatter<'_>,
    label: &str,
    amount: Decimal,
) -> fmt::Result {
    writeln!(
        f,
        "  {label:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
        format_currency(amount)
    )
}

// =============================================================================
// breakdown
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownReport<'a> {
    pub input: &'a SalaryInput,
    pub pay_periods_per_year: Decimal,
    pub breakdown: PaycheckBreakdown,
    pub annual_take_home: Decimal,
    /// False when the state was not found and the default rate applied.
    pub state_known: bool,
}

impl Display for BreakdownReport<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        let b = &self.breakdown;
        writeln!(
            f,
            "Paycheck ({}, {} per year, {})",
            self.input.pay_frequency, self.pay_periods_per_year, self.input.state
        )?;
        line(f, "Gross pay", b.gross_pay)?;
        line(f, "Federal tax", b.taxes.federal)?;
        line(f, "State tax", b.taxes.state)?;
        line(f, "FICA", b.taxes.fica)?;
        line(f, "Total taxes", b.taxes.total)?;
        line(f, "Health insurance", b.benefits.health_insurance)?;
        line(f, "Retirement", b.benefits.retirement)?;
        line(f, "Other benefits", b.benefits.other)?;
        line(f, "Total benefits", b.benefits.total)?;
        line(f, "Take-home pay", b.take_home_pay)?;
        line(f, "Take-home per year", self.annual_take_home)?;

        if !self.state_known {
            writeln!(
                f,
                "\nNote: '{}' is not a known state; the default state rate was used.",
                self.input.state
            )?;
        }
        if b.take_home_pay < Decimal::ZERO {
            writeln!(
                f,
                "\nNote: take-home pay is negative; check the pay period count."
            )?;
        }

        if !self.input.custom_benefits.is_empty() {
            writeln!(f, "\nCustom benefit elections (not deducted above)")?;
            for benefit in &self.input.custom_benefits {
                line(f, &benefit.name, benefit.amount)?;
            }
            line(f, "Total", self.input.custom_benefits_total())?;
        }
        Ok(())
    }
}

// =============================================================================
// projections
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ProjectionReport<'a>(pub &'a [MonthlyProjection]);

impl Display for ProjectionReport<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:>3}  {:<10}{:>13}{:>13}{:>13}{:>13}{:>15}",
            "#", "Month", "Gross", "Taxes", "Benefits", "Net", "Cumulative"
        )?;
        for p in self.0 {
            writeln!(
                f,
                "{:>3}  {:<10}{:>13}{:>13}{:>13}{:>13}{:>15}",
                p.month,
                p.month_name,
                format_currency(p.gross_pay),
                format_currency(p.taxes),
                format_currency(p.benefits),
                format_currency(p.net_pay),
                format_currency(p.cumulative_net),
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// annual
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct AnnualReport(pub AnnualEarnings);

impl Display for AnnualReport {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        let a = &self.0;
        writeln!(f, "Annual earnings")?;
        line(f, "Gross", a.annual_gross)?;
        line(f, "Taxes", a.annual_taxes)?;
        line(f, "Benefits", a.annual_benefits)?;
        line(f, "Net", a.annual_net)?;
        writeln!(
            f,
            "  {:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
            "Tax rate",
            format_percent(a.tax_rate)
        )?;
        writeln!(
            f,
            "  {:<LABEL_WIDTH$}{:>AMOUNT_WIDTH$}",
            "Take-home rate",
            format_percent(a.take_home_rate)
        )
    }
}

// =============================================================================
// tradeoffs
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct TradeoffReport<'a>(pub &'a [TradeoffComparison]);

impl Display for TradeoffReport<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "{:<32}{:>13}{:>15}{:>13}",
            "Scenario", "Monthly net", "Annual net", "Savings"
        )?;
        for c in self.0 {
            let savings = c.monthly_savings.map(format_currency).unwrap_or_default();
            writeln!(
                f,
                "{:<32}{:>13}{:>15}{:>13}",
                c.scenario,
                format_currency(c.monthly_net),
                format_currency(c.annual_net),
                savings,
            )?;
            writeln!(f, "    {}", c.description)?;
        }
        Ok(())
    }
}

// =============================================================================
// expenses
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ExpenseReport<'a> {
    pub items: &'a [ExpenseItem],
    pub monthly_expenses: Decimal,
    pub schedule: &'a [ExpenseAccumulation],
}

impl Display for ExpenseReport<'_> {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        if !self.items.is_empty() {
            writeln!(f, "Monthly expenses")?;
            for item in self.items {
                line(f, &item.name, item.amount)?;
            }
        }
        line(f, "Total per month", self.monthly_expenses)?;
        writeln!(f)?;

        writeln!(
            f,
            "{:>3}  {:<10}{:>15}{:>15}{:>10}",
            "#", "Month", "Expenses", "Balance", "Savings"
        )?;
        for e in self.schedule {
            writeln!(
                f,
                "{:>3}  {:<10}{:>15}{:>15}{:>10}",
                e.month,
                e.month_name,
                format_currency(e.total_expenses),
                format_currency(e.remaining_balance),
                format_percent(e.savings_rate),
            )?;
        }
        Ok(())
    }
}

// =============================================================================
// snapshot
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SnapshotReport(pub MonthSnapshot);

impl Display for SnapshotReport {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        let s = &self.0;
        writeln!(f, "One month of pay")?;
        line(f, "Gross", s.gross)?;
        line(f, "Federal tax", s.federal_tax)?;
        line(f, "State tax", s.state_tax)?;
        line(f, "FICA", s.fica)?;
        line(f, "Benefits", s.benefits)?;
        line(f, "Expenses", s.expenses)?;
        line(f, "Left over", s.net)
    }
}
