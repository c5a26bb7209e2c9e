use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use paycheck_core::TaxTables;
use paycheck_data::TaxTableLoader;

/// Validate tax table CSV files.
///
/// The brackets file should have the columns:
/// - tax_year: The tax year (e.g., 2024)
/// - min_income: The bottom of the bracket
/// - max_income: The top of the bracket (empty for unlimited)
/// - rate: The marginal rate as a decimal (e.g., 0.10)
///
/// The state rates file should have the columns `state` and `rate`.
#[derive(Parser, Debug)]
#[command(name = "tax-table-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing federal brackets
    #[arg(short, long)]
    brackets: PathBuf,

    /// Path to the CSV file containing state flat rates
    #[arg(short, long)]
    states: PathBuf,

    /// Tax year to validate; defaults to the built-in tables' year
    #[arg(short, long)]
    year: Option<i32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TaxTables::builtin().config().clone();
    if let Some(year) = args.year {
        config.tax_year = year;
    }

    let tables = TaxTableLoader::load_files(config, &args.brackets, &args.states)
        .with_context(|| {
            format!(
                "Failed to load tax tables from {} and {}",
                args.brackets.display(),
                args.states.display()
            )
        })?;

    println!("Tax year {}", tables.tax_year());
    for bracket in tables.federal_brackets() {
        let max = bracket
            .max_income
            .map_or_else(|| "and up".to_string(), |max| format!("to {max}"));
        println!("  {} {}: {}", bracket.min_income, max, bracket.rate);
    }
    println!("{} state rates", tables.state_rates().count());

    Ok(())
}
