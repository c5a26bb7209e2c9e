use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub tax_year: i32,
    pub min_income: Decimal,
    /// `None` marks the unbounded top bracket.
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    /// Tax owed on the slice of `income` that falls inside this bracket.
    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= self.min_income {
            return Decimal::ZERO;
        }
        let ceiling = match self.max_income {
            Some(max) => income.min(max),
            None => income,
        };
        (ceiling - self.min_income) * self.rate
    }

    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }
}
