use chrono::Month;
use paycheck_core::PayFrequency;
use paycheck_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::profile::ExpenseItem;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// `$` and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"60,000"`) and a leading `$`.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid decimal: {}", e);
        ParseDecimalError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a pay frequency name for clap.
pub fn parse_frequency(s: &str) -> Result<PayFrequency, String> {
    PayFrequency::parse(s).ok_or_else(|| {
        let names: Vec<_> = PayFrequency::all().iter().map(|f| f.as_str()).collect();
        format!("unknown pay frequency '{s}', expected one of: {}", names.join(", "))
    })
}

/// Parses a 1-based month number.
pub fn parse_month(s: &str) -> Result<Month, String> {
    s.trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or_else(|| format!("invalid month '{s}', expected 1-12"))
}

/// Parses a `NAME=AMOUNT` expense item.
pub fn parse_expense_item(s: &str) -> Result<ExpenseItem, String> {
    let (name, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{s}'"))?;
    let amount = parse_decimal(amount).map_err(|e| e.to_string())?;
    if amount < Decimal::ZERO {
        return Err(format!("expense '{}' must not be negative", name.trim()));
    }
    Ok(ExpenseItem {
        name: name.trim().to_string(),
        amount,
    })
}

/// Clap value parser for amounts.
pub fn parse_amount(s: &str) -> Result<Decimal, String> {
    parse_decimal(s).map_err(|e| e.to_string())
}

/// Formats an amount as dollars and cents with thousands separators,
/// e.g. `-$1,234.50`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

/// Formats a 0-100 percentage with one decimal place.
pub fn format_percent(value: Decimal) -> String {
    format!(
        "{:.1}%",
        value.round_dp_with_strategy(1, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("60,000").unwrap(), dec!(60000));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_accepts_dollar_sign() {
        assert_eq!(parse_decimal(" $1,500.25 ").unwrap(), dec!(1500.25));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(parse_decimal("sixty thousand").is_err());
    }

    #[test]
    fn parse_frequency_lists_choices_on_error() {
        assert_eq!(parse_frequency("Biweekly"), Ok(PayFrequency::Biweekly));

        let err = parse_frequency("fortnightly").unwrap_err();
        assert!(err.contains("weekly, biweekly, semimonthly, monthly, other"));
    }

    #[test]
    fn parse_month_accepts_one_through_twelve() {
        assert_eq!(parse_month("1"), Ok(Month::January));
        assert_eq!(parse_month("12"), Ok(Month::December));
        assert!(parse_month("0").is_err());
        assert!(parse_month("13").is_err());
    }

    #[test]
    fn parse_expense_item_splits_name_and_amount() {
        let item = parse_expense_item("Rent = 1,450").unwrap();

        assert_eq!(item.name, "Rent");
        assert_eq!(item.amount, dec!(1450));
    }

    #[test]
    fn parse_expense_item_rejects_missing_separator_and_negative() {
        assert!(parse_expense_item("Rent 1450").is_err());
        assert!(parse_expense_item("Rent=-5").is_err());
    }

    #[test]
    fn format_currency_groups_thousands() {
        assert_eq!(format_currency(dec!(3529.75)), "$3,529.75");
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(999.995)), "$1,000.00");
    }

    #[test]
    fn format_currency_negative_amounts() {
        assert_eq!(format_currency(dec!(-352.975)), "-$352.98");
    }

    #[test]
    fn format_percent_one_decimal() {
        assert_eq!(format_percent(dec!(21.405)), "21.4%");
        assert_eq!(format_percent(dec!(100)), "100.0%");
    }
}
