use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub federal: Decimal,
    pub state: Decimal,
    pub fica: Decimal,
    pub total: Decimal,
}

impl TaxBreakdown {
    pub fn new(
        federal: Decimal,
        state: Decimal,
        fica: Decimal,
    ) -> Self {
        Self {
            federal,
            state,
            fica,
            total: federal + state + fica,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitBreakdown {
    pub health_insurance: Decimal,
    pub retirement: Decimal,
    pub other: Decimal,
    pub total: Decimal,
}

impl BenefitBreakdown {
    pub fn new(
        health_insurance: Decimal,
        retirement: Decimal,
        other: Decimal,
    ) -> Self {
        Self {
            health_insurance,
            retirement,
            other,
            total: health_insurance + retirement + other,
        }
    }
}

/// One paycheck, decomposed. All amounts are per pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBreakdown {
    pub gross_pay: Decimal,
    pub taxes: TaxBreakdown,
    pub benefits: BenefitBreakdown,
    /// Not floored; negative values are left for the caller to flag.
    pub take_home_pay: Decimal,
}

impl PaycheckBreakdown {
    pub fn new(
        gross_pay: Decimal,
        taxes: TaxBreakdown,
        benefits: BenefitBreakdown,
    ) -> Self {
        Self {
            gross_pay,
            taxes,
            benefits,
            take_home_pay: gross_pay - taxes.total - benefits.total,
        }
    }
}
