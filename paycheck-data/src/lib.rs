//! CSV loading for the tax tables used by `paycheck-core`, so the federal
//! schedule and state rates can be revised each year without a rebuild.

pub mod loader;

pub use loader::{FederalBracketRecord, StateRateRecord, TableLoaderError, TaxTableLoader};
