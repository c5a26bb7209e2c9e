mod pay_frequency;
mod paycheck_breakdown;
mod projection;
mod salary_input;
mod tax_bracket;
mod tax_year_config;

pub use pay_frequency::PayFrequency;
pub use paycheck_breakdown::{BenefitBreakdown, PaycheckBreakdown, TaxBreakdown};
pub use projection::{
    AnnualEarnings, ExpenseAccumulation, MonthSnapshot, MonthlyProjection, TradeoffComparison,
};
pub use salary_input::{CustomBenefit, SalaryInput};
pub use tax_bracket::TaxBracket;
pub use tax_year_config::TaxYearConfig;
