//! Paycheck estimation and planning calculations.
//!
//! [`paycheck`] turns a [`SalaryInput`](crate::SalaryInput) into one
//! paycheck's breakdown. [`planning`] extrapolates that breakdown into
//! monthly projections, annual totals, tradeoff comparisons and expense
//! schedules. Everything here is synchronous and side-effect free.

pub mod common;
pub mod paycheck;
pub mod planning;
pub mod tradeoffs;

pub use paycheck::{EstimateError, PaycheckEstimator, annualize_take_home, estimate_take_home};
pub use planning::{
    MONTH_NAMES, PlanError, Planner, calculate_annual_earnings, calculate_expense_accumulation,
    calculate_monthly_projections, calculate_tradeoff_comparisons,
};
pub use tradeoffs::{BASELINE_SCENARIO, ScenarioAdjustment, TRADEOFF_SCENARIOS, TradeoffScenario};
