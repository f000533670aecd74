// src/bin/cli.rs
use clap::Parser;
use dmm_dashboard::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let args = cli::Args::parse();
    cli::run(args)?;
    Ok(())
}
