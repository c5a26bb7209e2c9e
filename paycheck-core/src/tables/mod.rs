//! Tax tables: the federal bracket schedule, the state flat-rate table and
//! the payroll rates for one tax year.
//!
//! Tables are plain data so they can be revised each year without touching
//! the calculation code. [`TaxTables::builtin_2024`] ships the 2024 figures;
//! other years can be loaded from CSV by the `paycheck-data` crate and
//! checked with [`TaxTables::new`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paycheck_core::TaxTables;
//!
//! let tables = TaxTables::builtin();
//!
//! assert_eq!(tables.annual_federal_tax(dec!(11600)), dec!(1160.00));
//! assert_eq!(tables.state_rate("Texas"), dec!(0));
//! assert_eq!(tables.state_rate("Atlantis"), dec!(0.05));
//! ```

pub mod builtin_2024;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{TaxBracket, TaxYearConfig};

static BUILTIN: LazyLock<TaxTables> = LazyLock::new(TaxTables::builtin_2024);

/// Errors raised when a set of tax tables fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTablesError {
    /// No federal brackets were supplied.
    #[error("no federal tax brackets provided")]
    NoBrackets,

    /// The lowest bracket does not start at zero income.
    #[error("first federal bracket must start at 0, got {0}")]
    FirstBracketNotZero(Decimal),

    /// A bracket does not start where the previous one ended.
    #[error("federal bracket {index} starts at {found}, expected {expected}")]
    BracketGap {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    /// A bracket's ceiling is not above its floor.
    #[error("federal bracket {index} has max income {max} not above min income {min}")]
    EmptyBracket {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    /// A bracket other than the last one has no ceiling.
    #[error("only the last federal bracket may be unbounded, bracket {0} is not last")]
    UnboundedBeforeLast(usize),

    /// The last bracket has a ceiling, leaving higher incomes uncovered.
    #[error("last federal bracket must be unbounded, it ends at {0}")]
    BoundedTopBracket(Decimal),

    /// A bracket belongs to a different tax year than the config.
    #[error("federal bracket {index} is for tax year {found}, expected {expected}")]
    TaxYearMismatch {
        index: usize,
        expected: i32,
        found: i32,
    },

    /// A rate is outside [0, 1].
    #[error("{name} rate must be between 0 and 1, got {rate}")]
    InvalidRate { name: String, rate: Decimal },

    /// The social security wage base is not positive.
    #[error("social security wage base must be positive, got {0}")]
    InvalidWageBase(Decimal),

    /// A state rate was keyed by an empty name.
    #[error("state name must not be empty")]
    EmptyStateName,
}

/// Validated tax tables for a single tax year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTables {
    config: TaxYearConfig,
    federal_brackets: Vec<TaxBracket>,
    state_rates: BTreeMap<String, Decimal>,
}

impl TaxTables {
    /// Builds and validates a set of tables.
    ///
    /// Brackets must be given in ascending order, start at zero, be
    /// contiguous, and end with a single unbounded bracket.
    ///
    /// # Errors
    ///
    /// Returns [`TaxTablesError`] describing the first rule the input breaks.
    pub fn new(
        config: TaxYearConfig,
        federal_brackets: Vec<TaxBracket>,
        state_rates: impl IntoIterator<Item = (String, Decimal)>,
    ) -> Result<Self, TaxTablesError> {
        validate_config(&config)?;
        validate_brackets(config.tax_year, &federal_brackets)?;

        let mut rates = BTreeMap::new();
        for (state, rate) in state_rates {
            let state = state.trim().to_string();
            if state.is_empty() {
                return Err(TaxTablesError::EmptyStateName);
            }
            check_rate(&state, rate)?;
            rates.insert(state, rate);
        }

        Ok(Self {
            config,
            federal_brackets,
            state_rates: rates,
        })
    }

    /// The 2024 tables: single-filer federal schedule, 2024 wage base, and
    /// flat state rates for all 50 states plus DC.
    pub fn builtin_2024() -> Self {
        let federal_brackets = builtin_2024::FEDERAL_BRACKETS
            .iter()
            .map(|&(min_income, max_income, rate)| TaxBracket {
                tax_year: builtin_2024::TAX_YEAR,
                min_income,
                max_income,
                rate,
            })
            .collect();
        let state_rates = builtin_2024::STATE_RATES
            .iter()
            .map(|&(state, rate)| (state.to_string(), rate))
            .collect();

        Self {
            config: builtin_2024::config(),
            federal_brackets,
            state_rates,
        }
    }

    /// Shared instance of [`TaxTables::builtin_2024`].
    pub fn builtin() -> &'static TaxTables {
        &BUILTIN
    }

    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    pub fn tax_year(&self) -> i32 {
        self.config.tax_year
    }

    pub fn federal_brackets(&self) -> &[TaxBracket] {
        &self.federal_brackets
    }

    pub fn state_rates(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.state_rates.iter().map(|(state, rate)| (state.as_str(), *rate))
    }

    pub fn is_known_state(
        &self,
        state: &str,
    ) -> bool {
        self.state_rates.contains_key(state)
    }

    /// Flat rate for `state`, matched on the exact full name.
    ///
    /// Unknown names silently get the config's default rate.
    pub fn state_rate(
        &self,
        state: &str,
    ) -> Decimal {
        match self.state_rates.get(state) {
            Some(rate) => *rate,
            None => {
                debug!(state, rate = %self.config.default_state_rate, "unknown state, using default rate");
                self.config.default_state_rate
            }
        }
    }

    /// Annual federal tax on `income`, summing each bracket's slice.
    pub fn annual_federal_tax(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.federal_brackets
            .iter()
            .map(|bracket| bracket.tax_on(income))
            .sum()
    }

    /// Rate applied to the topmost dollar of `income`. Zero income has no
    /// top dollar and reports zero.
    pub fn marginal_rate(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.federal_brackets
            .iter()
            .find(|bracket| bracket.contains(income))
            .map_or(Decimal::ZERO, |bracket| bracket.rate)
    }
}

impl Default for TaxTables {
    fn default() -> Self {
        Self::builtin_2024()
    }
}

fn check_rate(
    name: &str,
    rate: Decimal,
) -> Result<(), TaxTablesError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(TaxTablesError::InvalidRate {
            name: name.to_string(),
            rate,
        });
    }
    Ok(())
}

fn validate_config(config: &TaxYearConfig) -> Result<(), TaxTablesError> {
    if config.ss_wage_base <= Decimal::ZERO {
        return Err(TaxTablesError::InvalidWageBase(config.ss_wage_base));
    }
    check_rate("social security", config.ss_tax_rate)?;
    check_rate("medicare", config.medicare_tax_rate)?;
    check_rate("health insurance", config.health_insurance_rate)?;
    check_rate("retirement", config.retirement_rate)?;
    check_rate("default state", config.default_state_rate)
}

fn validate_brackets(
    tax_year: i32,
    brackets: &[TaxBracket],
) -> Result<(), TaxTablesError> {
    let first = brackets.first().ok_or(TaxTablesError::NoBrackets)?;
    if first.min_income != Decimal::ZERO {
        return Err(TaxTablesError::FirstBracketNotZero(first.min_income));
    }

    let last_index = brackets.len() - 1;
    let mut expected_min = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.tax_year != tax_year {
            return Err(TaxTablesError::TaxYearMismatch {
                index,
                expected: tax_year,
                found: bracket.tax_year,
            });
        }
        if bracket.min_income != expected_min {
            return Err(TaxTablesError::BracketGap {
                index,
                expected: expected_min,
                found: bracket.min_income,
            });
        }
        check_rate(&format!("federal bracket {index}"), bracket.rate)?;

        match bracket.max_income {
            Some(max) if index == last_index => {
                return Err(TaxTablesError::BoundedTopBracket(max));
            }
            Some(max) if max <= bracket.min_income => {
                return Err(TaxTablesError::EmptyBracket {
                    index,
                    min: bracket.min_income,
                    max,
                });
            }
            Some(max) => expected_min = max,
            None if index != last_index => {
                return Err(TaxTablesError::UnboundedBeforeLast(index));
            }
            None => {}
        }
    }

    Ok(())
}
