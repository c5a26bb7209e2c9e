//! Command-line surface of the `paycheck` binary.
//!
//! Flags override the profile, and the profile overrides the built-in
//! defaults. Every subcommand returns its rendered report as a string so
//! the binary only has to print it.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Month;
use clap::{Args, Parser, Subcommand};
use paycheck_core::calculations::{Planner, annualize_take_home};
use paycheck_core::{PayFrequency, SalaryInput, TaxTables, TaxYearConfig};
use paycheck_data::TaxTableLoader;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::profile::{ExpenseItem, PlanSettings, Profile, TableSettings};
use crate::report::{
    AnnualReport, BreakdownReport, ExpenseReport, OutputFormat, ProjectionReport, SnapshotReport,
    TradeoffReport, render,
};
use crate::utils::{parse_amount, parse_expense_item, parse_frequency, parse_month};

/// Months covered by `project` and `expenses` when neither the flag nor the
/// profile says otherwise.
pub const DEFAULT_MONTHS: u32 = 12;

#[derive(Debug, Parser)]
#[command(
    name = "paycheck",
    version,
    about = "Estimate take-home pay and plan a budget around it",
    long_about = "Estimates a single paycheck's federal, state and FICA taxes and \
                  benefit deductions from an annual salary, then projects it into \
                  monthly, annual and what-if views."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// TOML profile with [salary], [plan] and [tables] sections
    #[arg(long, global = true, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Annual salary, e.g. 60,000
    #[arg(long, global = true, value_parser = parse_amount)]
    pub salary: Option<Decimal>,

    /// Pay frequency: weekly, biweekly, semimonthly, monthly or other
    #[arg(long, global = true, value_parser = parse_frequency)]
    pub frequency: Option<PayFrequency>,

    /// Paychecks per year, overriding the frequency's count
    #[arg(long, global = true, value_parser = parse_amount)]
    pub periods: Option<Decimal>,

    /// Full state name, e.g. "New York"
    #[arg(long, global = true)]
    pub state: Option<String>,

    /// Federal brackets CSV (tax_year,min_income,max_income,rate)
    #[arg(long, global = true, value_name = "CSV")]
    pub brackets: Option<PathBuf>,

    /// State rates CSV (state,rate)
    #[arg(long, global = true, value_name = "CSV")]
    pub state_rates: Option<PathBuf>,

    /// Tax year to select from the brackets CSV [default: latest in file]
    #[arg(long, global = true)]
    pub tax_year: Option<i32>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log filter, e.g. "debug" or "paycheck_core=trace" [default: RUST_LOG or warn]
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log records to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// First month of projections, 1-12 [default: current month]
    #[arg(long, global = true, value_parser = parse_month)]
    pub start_month: Option<Month>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show one paycheck's taxes, benefits and take-home pay
    Breakdown,

    /// Project pay month by month with a running net total
    Project {
        /// Number of months [default: profile or 12]
        #[arg(long)]
        months: Option<u32>,
    },

    /// Annual totals and effective rates
    Annual,

    /// Compare monthly net pay across lifestyle tradeoffs
    Tradeoffs,

    /// Month-by-month balance after a recurring monthly expense
    Expenses {
        /// Number of months [default: profile or 12]
        #[arg(long)]
        months: Option<u32>,

        #[command(flatten)]
        expenses: ExpenseArgs,
    },

    /// One month of pay stacked into taxes, benefits, expenses and what is left
    Snapshot {
        #[command(flatten)]
        expenses: ExpenseArgs,
    },
}

#[derive(Debug, Args)]
pub struct ExpenseArgs {
    /// Total monthly expenses
    #[arg(long, value_parser = parse_amount, conflicts_with = "expense")]
    pub monthly_expenses: Option<Decimal>,

    /// A named monthly expense; repeatable, amounts are summed
    #[arg(long = "expense", value_name = "NAME=AMOUNT", value_parser = parse_expense_item)]
    pub expense: Vec<ExpenseItem>,
}

impl ExpenseArgs {
    /// Itemized expenses and their monthly total. Flags win over the
    /// profile; a single total wins over items from the same source.
    fn resolve(
        &self,
        plan: &PlanSettings,
    ) -> (Vec<ExpenseItem>, Decimal) {
        if let Some(total) = self.monthly_expenses {
            return (Vec::new(), total);
        }
        if !self.expense.is_empty() {
            return (self.expense.clone(), sum_items(&self.expense));
        }
        let items = match plan.monthly_expenses {
            Some(_) => Vec::new(),
            None => plan.expenses.clone(),
        };
        (items, plan.total_expenses().unwrap_or_default())
    }
}

fn sum_items(items: &[ExpenseItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}

/// Runs a parsed command line and returns the rendered report.
pub fn run(cli: &Cli) -> Result<String> {
    let global = &cli.global;
    let profile = match &global.profile {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };

    let input = salary_input(global, profile.salary.clone())?;
    let tables = load_tables(global, &profile.tables)?;
    if !tables.is_known_state(&input.state) {
        warn!(state = %input.state, "unknown state, using the default state rate");
    }

    let mut planner = Planner::new(&tables);
    if let Some(month) = global.start_month {
        planner = planner.with_start_month(month);
    }
    let months = |flag: Option<u32>| flag.or(profile.plan.months).unwrap_or(DEFAULT_MONTHS);
    let format = global.format;

    debug!(command = ?cli.command, tax_year = tables.tax_year(), "running");
    let output = match &cli.command {
        Command::Breakdown => {
            let breakdown = planner.breakdown(&input)?;
            let report = BreakdownReport {
                input: &input,
                pay_periods_per_year: planner.estimator().periods_per_year(&input),
                breakdown,
                annual_take_home: annualize_take_home(breakdown.take_home_pay, input.pay_frequency),
                state_known: tables.is_known_state(&input.state),
            };
            render(&report, format)?
        }
        Command::Project { months: flag } => {
            let projections = planner.monthly_projections(&input, months(*flag))?;
            render(&ProjectionReport(&projections), format)?
        }
        Command::Annual => render(&AnnualReport(planner.annual_earnings(&input)?), format)?,
        Command::Tradeoffs => {
            let comparisons = planner.tradeoff_comparisons(&input)?;
            render(&TradeoffReport(&comparisons), format)?
        }
        Command::Expenses {
            months: flag,
            expenses,
        } => {
            let (items, monthly_expenses) = expenses.resolve(&profile.plan);
            let schedule = planner.expense_accumulation(&input, monthly_expenses, months(*flag))?;
            let report = ExpenseReport {
                items: &items,
                monthly_expenses,
                schedule: &schedule,
            };
            render(&report, format)?
        }
        Command::Snapshot { expenses } => {
            let (_, monthly_expenses) = expenses.resolve(&profile.plan);
            render(&SnapshotReport(planner.month_snapshot(&input, monthly_expenses)?), format)?
        }
    };

    Ok(output)
}

/// Merges the profile's `[salary]` section with the salary flags.
fn salary_input(
    global: &GlobalArgs,
    from_profile: Option<SalaryInput>,
) -> Result<SalaryInput> {
    let mut input = match (from_profile, global.salary) {
        (Some(mut input), salary) => {
            if let Some(salary) = salary {
                input.annual_salary = salary;
            }
            input
        }
        (None, Some(salary)) => SalaryInput::new(salary, PayFrequency::default(), ""),
        (None, None) => bail!("no salary given: pass --salary or a --profile with a [salary] section"),
    };

    if let Some(frequency) = global.frequency {
        input.pay_frequency = frequency;
    }
    if let Some(periods) = global.periods {
        input.pay_periods_per_year = Some(periods);
    }
    if let Some(state) = &global.state {
        input.state = state.trim().to_string();
    }
    Ok(input)
}

/// Built-in tables unless both CSV paths are configured.
fn load_tables(
    global: &GlobalArgs,
    settings: &TableSettings,
) -> Result<TaxTables> {
    let brackets = global.brackets.as_ref().or(settings.federal_brackets.as_ref());
    let state_rates = global.state_rates.as_ref().or(settings.state_rates.as_ref());
    let tax_year = global.tax_year.or(settings.tax_year);

    match (brackets, state_rates) {
        (None, None) => {
            let builtin = TaxTables::builtin_2024();
            match tax_year {
                Some(year) if year != builtin.tax_year() => bail!(
                    "no built-in tables for tax year {year}; pass --brackets and --state-rates"
                ),
                _ => Ok(builtin),
            }
        }
        (Some(brackets), Some(state_rates)) => load_table_files(brackets, state_rates, tax_year),
        _ => bail!("--brackets and --state-rates must be given together"),
    }
}

fn load_table_files(
    brackets_path: &Path,
    state_rates_path: &Path,
    tax_year: Option<i32>,
) -> Result<TaxTables> {
    let open = |path: &Path| {
        File::open(path).with_context(|| format!("cannot open '{}'", path.display()))
    };

    let brackets = TaxTableLoader::parse_brackets(open(brackets_path)?)
        .with_context(|| format!("reading {}", brackets_path.display()))?;
    let state_rates = TaxTableLoader::parse_state_rates(open(state_rates_path)?)
        .with_context(|| format!("reading {}", state_rates_path.display()))?;

    let tax_year = match tax_year {
        Some(year) => year,
        None => match TaxTableLoader::tax_years(&brackets).last() {
            Some(year) => *year,
            None => bail!("{} has no federal brackets", brackets_path.display()),
        },
    };
    // Payroll and benefit rates are not part of the CSV files.
    let config = TaxYearConfig {
        tax_year,
        ..TaxTables::builtin().config().clone()
    };

    let tables = TaxTableLoader::build(config, &brackets, &state_rates)
        .with_context(|| format!("building {tax_year} tax tables"))?;
    debug!(
        tax_year,
        brackets = %brackets_path.display(),
        states = %state_rates_path.display(),
        "using tax tables from files"
    );
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("paycheck").chain(args.iter().copied()))
            .expect("valid command line")
    }

    // =========================================================================
    // parsing tests
    // =========================================================================

    #[test]
    fn test_global_flags_accepted_after_subcommand() {
        let cli = parse(&["breakdown", "--salary", "60,000", "--frequency", "Biweekly"]);

        assert_eq!(cli.global.salary, Some(dec!(60000)));
        assert_eq!(cli.global.frequency, Some(PayFrequency::Biweekly));
        assert!(matches!(cli.command, Command::Breakdown));
    }

    #[test]
    fn test_expense_flags_are_repeatable() {
        let cli = parse(&[
            "expenses",
            "--expense",
            "Rent=1500",
            "--expense",
            "Food=450.50",
            "--months",
            "3",
        ]);

        let Command::Expenses { months, expenses } = cli.command else {
            panic!("expected expenses command");
        };
        assert_eq!(months, Some(3));
        let (items, total) = expenses.resolve(&PlanSettings::default());
        assert_eq!(items.len(), 2);
        assert_eq!(total, dec!(1950.50));
    }

    #[test]
    fn test_monthly_expenses_conflicts_with_items() {
        let result = Cli::try_parse_from([
            "paycheck",
            "snapshot",
            "--monthly-expenses",
            "100",
            "--expense",
            "Rent=1",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_start_month_rejected() {
        let result = Cli::try_parse_from(["paycheck", "annual", "--start-month", "13"]);

        assert!(result.is_err());
    }

    // =========================================================================
    // resolution tests
    // =========================================================================

    #[test]
    fn test_missing_salary_is_an_error() {
        let err = run(&parse(&["breakdown"])).unwrap_err();

        assert!(err.to_string().contains("no salary given"));
    }

    #[test]
    fn test_flags_override_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.toml");
        fs::write(
            &path,
            "[salary]\nannual_salary = \"90000\"\npay_frequency = \"weekly\"\nstate = \"Ohio\"\n",
        )
        .unwrap();
        let cli = parse(&[
            "--profile",
            path.to_str().unwrap(),
            "--salary",
            "60000",
            "--frequency",
            "monthly",
            "breakdown",
        ]);

        let input = salary_input(&cli.global, Profile::load(&path).unwrap().salary).unwrap();

        assert_eq!(input.annual_salary, dec!(60000));
        assert_eq!(input.pay_frequency, PayFrequency::Monthly);
        assert_eq!(input.state, "Ohio");
    }

    #[test]
    fn test_profile_expenses_used_when_no_flags() {
        let plan = PlanSettings {
            months: None,
            monthly_expenses: None,
            expenses: vec![ExpenseItem {
                name: "Rent".into(),
                amount: dec!(1200),
            }],
        };
        let args = ExpenseArgs {
            monthly_expenses: None,
            expense: Vec::new(),
        };

        let (items, total) = args.resolve(&plan);

        assert_eq!(items, plan.expenses);
        assert_eq!(total, dec!(1200));
    }

    #[test]
    fn test_profile_monthly_total_wins_over_profile_items() {
        let plan = PlanSettings {
            months: None,
            monthly_expenses: Some(dec!(2000)),
            expenses: vec![ExpenseItem {
                name: "Rent".into(),
                amount: dec!(1200),
            }],
        };
        let args = ExpenseArgs {
            monthly_expenses: None,
            expense: Vec::new(),
        };

        let (items, total) = args.resolve(&plan);

        assert!(items.is_empty());
        assert_eq!(total, dec!(2000));
    }

    #[test]
    fn test_no_expenses_anywhere_is_zero() {
        let args = ExpenseArgs {
            monthly_expenses: None,
            expense: Vec::new(),
        };

        let (items, total) = args.resolve(&PlanSettings::default());

        assert!(items.is_empty());
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_builtin_tables_reject_other_tax_year() {
        let cli = parse(&["--salary", "1", "--tax-year", "2025", "annual"]);

        let err = load_tables(&cli.global, &TableSettings::default()).unwrap_err();

        assert!(err.to_string().contains("no built-in tables for tax year 2025"));
    }

    #[test]
    fn test_builtin_tables_accept_their_own_tax_year() {
        let cli = parse(&["--salary", "1", "--tax-year", "2024", "annual"]);

        let tables = load_tables(&cli.global, &TableSettings::default()).unwrap();

        assert_eq!(tables.tax_year(), 2024);
    }

    #[test]
    fn test_profile_tax_year_without_files_is_rejected() {
        let cli = parse(&["--salary", "1", "annual"]);
        let settings = TableSettings {
            tax_year: Some(2023),
            ..TableSettings::default()
        };

        assert!(load_tables(&cli.global, &settings).is_err());
    }

    #[test]
    fn test_single_table_path_is_an_error() {
        let cli = parse(&["--salary", "1", "--brackets", "b.csv", "annual"]);

        let err = load_tables(&cli.global, &TableSettings::default()).unwrap_err();

        assert!(err.to_string().contains("must be given together"));
    }

    // =========================================================================
    // run tests
    // =========================================================================

    #[test]
    fn test_run_breakdown_worked_example() {
        let cli = parse(&[
            "--salary", "60000", "--frequency", "monthly", "--state", "Texas", "breakdown",
        ]);

        let output = run(&cli).unwrap();

        assert!(output.contains("$3,529.75"));
    }

    #[test]
    fn test_run_expenses_uses_profile_months() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.toml");
        fs::write(
            &path,
            "[salary]\nannual_salary = \"60000\"\npay_frequency = \"monthly\"\nstate = \"Texas\"\n\n\
             [plan]\nmonths = 2\nmonthly_expenses = \"1000\"\n",
        )
        .unwrap();
        let cli = parse(&[
            "--profile",
            path.to_str().unwrap(),
            "--start-month",
            "1",
            "--format",
            "json",
            "expenses",
        ]);

        let output = run(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let schedule = value["schedule"].as_array().unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[1]["month_name"], "Feb");
    }

    #[test]
    fn test_run_rejects_non_positive_salary() {
        let cli = parse(&["--salary", "0", "annual"]);

        let err = run(&cli).unwrap_err();

        assert!(err.to_string().contains("annual salary must be positive"));
    }

    #[test]
    fn test_run_rejects_negative_expenses() {
        let cli = parse(&["--salary", "60000", "snapshot", "--monthly-expenses=-10"]);

        assert!(run(&cli).is_err());
    }
}
