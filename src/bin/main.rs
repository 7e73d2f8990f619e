use std::path::Path;

use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use lgdocs::{cli::input::CliArgs, utils::logger::config_logger, worker::run_lgdocs};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stdout).expect("Error configuring the logger");
    log::info!("Preparing the Looking Glass Proxy documentation tree");
    run_lgdocs(&cli_args, Path::new("."))?;
    log::info!("Documentation tree ready for the site generator");

    Ok(())
}
