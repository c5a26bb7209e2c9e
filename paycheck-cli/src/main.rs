use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use paycheck_cli::{Cli, logging, run};

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.global.log_level.as_deref(), cli.global.log_file.as_deref())?;
    debug!(?cli, "parsed command line");

    let output = run(&cli)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
