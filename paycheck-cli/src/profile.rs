//! TOML profile holding the onboarding answers so they need not be retyped
//! on every run.
//!
//! ```toml
//! [salary]
//! annual_salary = "60000"
//! pay_frequency = "biweekly"
//! state = "New York"
//!
//! [[salary.custom_benefits]]
//! id = "gym"
//! name = "Gym membership"
//! amount = "40"
//!
//! [plan]
//! months = 12
//!
//! [[plan.expenses]]
//! name = "Rent"
//! amount = "1500"
//!
//! [tables]
//! federal_brackets = "federal_brackets.csv"
//! state_rates = "state_rates.csv"
//! ```
//!
//! Relative table paths are resolved against the profile's directory.

use std::fs;
use std::path::{Path, PathBuf};

use paycheck_core::SalaryInput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be read.
    #[error("cannot read profile '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The profile is not valid TOML or has unexpected fields.
    #[error("invalid profile '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// A named recurring monthly expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanSettings {
    pub months: Option<u32>,
    /// Single recurring amount; takes precedence over `expenses`.
    pub monthly_expenses: Option<Decimal>,
    pub expenses: Vec<ExpenseItem>,
}

impl PlanSettings {
    /// The recurring monthly expense this profile describes, if any.
    pub fn total_expenses(&self) -> Option<Decimal> {
        self.monthly_expenses.or_else(|| {
            (!self.expenses.is_empty()).then(|| self.expenses.iter().map(|e| e.amount).sum())
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableSettings {
    /// Year to select from the brackets file; the latest year when absent.
    pub tax_year: Option<i32>,
    pub federal_brackets: Option<PathBuf>,
    pub state_rates: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub salary: Option<SalaryInput>,
    pub plan: PlanSettings,
    pub tables: TableSettings,
}

impl Profile {
    /// Parses a profile from TOML text. Table paths are left as written.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads a profile file and resolves relative table paths against its
    /// directory.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let text = fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut profile = Self::parse(&text).map_err(|source| ProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(dir) = path.parent() {
            profile.tables.resolve_relative_to(dir);
        }
        debug!(path = %path.display(), has_salary = profile.salary.is_some(), "loaded profile");
        Ok(profile)
    }
}

impl TableSettings {
    fn resolve_relative_to(
        &mut self,
        dir: &Path,
    ) {
        for path in [&mut self.federal_brackets, &mut self.state_rates]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = dir.join(&*path);
            }
        }
    }
}
