pub mod cli;
pub mod logging;
pub mod profile;
pub mod report;
pub mod utils;

pub use cli::{Cli, Command, run};
pub use report::OutputFormat;
