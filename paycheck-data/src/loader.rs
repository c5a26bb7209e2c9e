use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use paycheck_core::{TaxBracket, TaxTables, TaxTablesError, TaxYearConfig};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading tax table data.
#[derive(Debug, Error)]
pub enum TableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("no federal brackets for tax year {0}")]
    NoBracketsForYear(i32),

    #[error("cannot open '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tax tables: {0}")]
    Tables(#[from] TaxTablesError),
}

impl From<csv::Error> for TableLoaderError {
    fn from(err: csv::Error) -> Self {
        TableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the federal brackets CSV file.
///
/// - `tax_year`: The tax year (e.g., 2024)
/// - `min_income`: The bottom of the bracket
/// - `max_income`: The top of the bracket (empty for unlimited)
/// - `rate`: The marginal rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FederalBracketRecord {
    pub tax_year: i32,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

/// A single record from the state rates CSV file: a full state name and
/// its flat effective rate.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StateRateRecord {
    pub state: String,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn parse_records<R, T>(reader: R) -> Result<Vec<T>, TableLoaderError>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        records.push(result?);
    }

    Ok(records)
}

fn open(path: &Path) -> Result<File, TableLoaderError> {
    File::open(path).map_err(|source| TableLoaderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loader for tax tables from CSV files.
///
/// A brackets file may hold several tax years; only the rows matching the
/// config's year are used. Rows may appear in any order.
pub struct TaxTableLoader;

impl TaxTableLoader {
    /// Parse federal bracket records from a CSV reader.
    pub fn parse_brackets<R: Read>(
        reader: R
    ) -> Result<Vec<FederalBracketRecord>, TableLoaderError> {
        parse_records(reader)
    }

    /// Parse state rate records from a CSV reader.
    pub fn parse_state_rates<R: Read>(reader: R) -> Result<Vec<StateRateRecord>, TableLoaderError> {
        parse_records(reader)
    }

    /// Tax years present in a set of bracket records, ascending.
    pub fn tax_years(brackets: &[FederalBracketRecord]) -> Vec<i32> {
        let mut years: Vec<_> = brackets.iter().map(|r| r.tax_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Build validated [`TaxTables`] for `config.tax_year`.
    pub fn build(
        config: TaxYearConfig,
        brackets: &[FederalBracketRecord],
        state_rates: &[StateRateRecord],
    ) -> Result<TaxTables, TableLoaderError> {
        let tax_year = config.tax_year;

        let mut federal: Vec<TaxBracket> = brackets
            .iter()
            .filter(|r| r.tax_year == tax_year)
            .map(|r| TaxBracket {
                tax_year: r.tax_year,
                min_income: r.min_income,
                max_income: r.max_income,
                rate: r.rate,
            })
            .collect();
        if federal.is_empty() {
            return Err(TableLoaderError::NoBracketsForYear(tax_year));
        }
        federal.sort_by(|a, b| a.min_income.cmp(&b.min_income));

        let rates = state_rates.iter().map(|r| (r.state.clone(), r.rate));
        let tables = TaxTables::new(config, federal, rates)?;

        debug!(
            tax_year,
            brackets = tables.federal_brackets().len(),
            states = tables.state_rates().count(),
            "loaded tax tables"
        );
        Ok(tables)
    }

    /// Read both CSV files and build tables for `config.tax_year`.
    pub fn load_files(
        config: TaxYearConfig,
        brackets_path: &Path,
        state_rates_path: &Path,
    ) -> Result<TaxTables, TableLoaderError> {
        let brackets = Self::parse_brackets(open(brackets_path)?)?;
        let state_rates = Self::parse_state_rates(open(state_rates_path)?)?;
        Self::build(config, &brackets, &state_rates)
    }
}
