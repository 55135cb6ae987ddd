use anyhow::{Result, anyhow};
use clap::Parser;

mod cli_args;
mod config;
mod language;
mod llm;
mod logging;
mod registry;
mod setup;

use cli_args::Cli;
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if cli.list_models {
        registry::print_models();
        return Ok(());
    }

    // clap already enforces this; kept so the invariant survives CLI refactors.
    let diff = cli
        .diff
        .as_deref()
        .ok_or_else(|| anyhow!("--diff is required unless --list-models is given"))?;

    let cfg = Config::from_sources(&cli);
    let client = setup::build_llm_client(&cfg, &cli)?;

    let message = client.generate_commit_message(diff, cfg.language)?;
    println!("{message}");
    Ok(())
}
