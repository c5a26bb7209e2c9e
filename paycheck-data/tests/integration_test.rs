//! Integration tests loading the fixture CSV files under `test-data/`.

use std::path::{Path, PathBuf};

use paycheck_core::calculations::PaycheckEstimator;
use paycheck_core::{PayFrequency, SalaryInput, TaxTables, TaxYearConfig};
use paycheck_data::TaxTableLoader;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test-data").join(name)
}

fn config_for(tax_year: i32) -> TaxYearConfig {
    TaxYearConfig {
        tax_year,
        ..TaxTables::builtin().config().clone()
    }
}

fn load(tax_year: i32) -> TaxTables {
    TaxTableLoader::load_files(
        config_for(tax_year),
        &fixture("federal_brackets.csv"),
        &fixture("state_rates.csv"),
    )
    .expect("Failed to load fixture tables")
}

#[test]
fn test_fixture_2024_matches_builtin_tables() {
    let tables = load(2024);

    assert_eq!(&tables, TaxTables::builtin());
}

#[test]
fn test_fixture_lists_both_years() {
    let file = std::fs::File::open(fixture("federal_brackets.csv")).unwrap();
    let records = TaxTableLoader::parse_brackets(file).unwrap();

    assert_eq!(TaxTableLoader::tax_years(&records), vec![2024, 2025]);
}

#[test]
fn test_2025_brackets_change_federal_tax() {
    let tables_2025 = load(2025);
    let input = SalaryInput::new(dec!(60000), PayFrequency::Monthly, "Texas");

    let breakdown = PaycheckEstimator::new(&tables_2025).estimate(&input).unwrap();

    // 1192.50 + (48475 - 11925) * 0.12 + (60000 - 48475) * 0.22 = 8114
    assert_eq!(tables_2025.annual_federal_tax(dec!(60000)), dec!(8114));
    assert!((breakdown.taxes.federal - dec!(676.1666666)).abs() < dec!(0.0000001));
}

#[test]
fn test_loaded_state_rates_drive_state_tax() {
    let tables = load(2024);
    let input = SalaryInput::new(dec!(52000), PayFrequency::Weekly, "Hawaii");

    let breakdown = PaycheckEstimator::new(&tables).estimate(&input).unwrap();

    assert_eq!(breakdown.taxes.state, dec!(80));
}
