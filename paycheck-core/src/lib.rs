pub mod calculations;
pub mod models;
pub mod tables;

pub use calculations::{EstimateError, PaycheckEstimator, PlanError, Planner};
pub use models::*;
pub use tables::{TaxTables, TaxTablesError};
