use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayFrequency {
    Weekly,
    Biweekly,
    Semimonthly,
    #[default]
    Monthly,
    /// Custom cadence; the period count comes from `SalaryInput::pay_periods_per_year`.
    Other,
}

impl PayFrequency {
    pub fn all() -> &'static [PayFrequency] {
        &[
            PayFrequency::Weekly,
            PayFrequency::Biweekly,
            PayFrequency::Semimonthly,
            PayFrequency::Monthly,
            PayFrequency::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Semimonthly => "semimonthly",
            Self::Monthly => "monthly",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Some(Self::Weekly),
            "biweekly" => Some(Self::Biweekly),
            "semimonthly" => Some(Self::Semimonthly),
            "monthly" => Some(Self::Monthly),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Standard paychecks per year. `Other` falls back to the monthly count.
    pub fn periods_per_year(&self) -> Decimal {
        match self {
            Self::Weekly => dec!(52),
            Self::Biweekly => dec!(26),
            Self::Semimonthly => dec!(24),
            Self::Monthly | Self::Other => dec!(12),
        }
    }

    /// Averaged paychecks per month used by every projection.
    ///
    /// These are not calendar-exact (`52 / 12` is 4.333..., not 4.33) and
    /// must stay as they are: all projection figures depend on them.
    pub fn periods_per_month(&self) -> Decimal {
        match self {
            Self::Weekly => dec!(4.33),
            Self::Biweekly => dec!(2.17),
            Self::Semimonthly => dec!(2),
            Self::Monthly | Self::Other => dec!(1),
        }
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
