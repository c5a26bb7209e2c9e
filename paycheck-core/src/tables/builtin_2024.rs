//! Built-in 2024 reference data.
//!
//! Federal figures are the single-filer schedule. State figures are flat
//! effective approximations, not the states' actual bracket schedules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::TaxYearConfig;

pub const TAX_YEAR: i32 = 2024;

/// `(min_income, max_income, rate)`; `None` is the unbounded top bracket.
pub const FEDERAL_BRACKETS: [(Decimal, Option<Decimal>, Decimal); 7] = [
    (dec!(0), Some(dec!(11600)), dec!(0.10)),
    (dec!(11600), Some(dec!(47150)), dec!(0.12)),
    (dec!(47150), Some(dec!(100525)), dec!(0.22)),
    (dec!(100525), Some(dec!(191950)), dec!(0.24)),
    (dec!(191950), Some(dec!(243725)), dec!(0.32)),
    (dec!(243725), Some(dec!(609350)), dec!(0.35)),
    (dec!(609350), None, dec!(0.37)),
];

pub const STATE_RATES: [(&str, Decimal); 51] = [
    // No state income tax
    ("Alaska", dec!(0)),
    ("Florida", dec!(0)),
    ("Nevada", dec!(0)),
    ("New Hampshire", dec!(0)),
    ("South Dakota", dec!(0)),
    ("Tennessee", dec!(0)),
    ("Texas", dec!(0)),
    ("Washington", dec!(0)),
    ("Wyoming", dec!(0)),
    // Flat-rate states
    ("Colorado", dec!(0.045)),
    ("Illinois", dec!(0.0495)),
    ("Indiana", dec!(0.0323)),
    ("Michigan", dec!(0.0425)),
    ("Pennsylvania", dec!(0.0307)),
    ("Utah", dec!(0.0495)),
    // Medium
    ("Alabama", dec!(0.05)),
    ("Arizona", dec!(0.05)),
    ("Arkansas", dec!(0.05)),
    ("Georgia", dec!(0.055)),
    ("Idaho", dec!(0.06)),
    ("Iowa", dec!(0.055)),
    ("Kansas", dec!(0.0525)),
    ("Kentucky", dec!(0.05)),
    ("Louisiana", dec!(0.045)),
    ("Maine", dec!(0.075)),
    ("Maryland", dec!(0.0525)),
    ("Minnesota", dec!(0.055)),
    ("Mississippi", dec!(0.05)),
    ("Missouri", dec!(0.0525)),
    ("Montana", dec!(0.055)),
    ("Nebraska", dec!(0.065)),
    ("New Mexico", dec!(0.049)),
    ("North Carolina", dec!(0.0525)),
    ("North Dakota", dec!(0.025)),
    ("Ohio", dec!(0.0399)),
    ("Oklahoma", dec!(0.05)),
    ("Rhode Island", dec!(0.055)),
    ("South Carolina", dec!(0.07)),
    ("Vermont", dec!(0.06)),
    ("Virginia", dec!(0.0575)),
    ("West Virginia", dec!(0.065)),
    ("Wisconsin", dec!(0.053)),
    // Higher
    ("California", dec!(0.09)),
    ("Connecticut", dec!(0.06)),
    ("Delaware", dec!(0.066)),
    ("Hawaii", dec!(0.08)),
    ("Massachusetts", dec!(0.05)),
    ("New Jersey", dec!(0.07)),
    ("New York", dec!(0.065)),
    ("Oregon", dec!(0.09)),
    ("District of Columbia", dec!(0.08)),
];

pub fn config() -> TaxYearConfig {
    TaxYearConfig {
        tax_year: TAX_YEAR,
        ss_wage_base: dec!(168600),
        ss_tax_rate: dec!(0.062),
        medicare_tax_rate: dec!(0.0145),
        health_insurance_rate: dec!(0.05),
        retirement_rate: dec!(0.03),
        default_state_rate: dec!(0.05),
    }
}
