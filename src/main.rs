//! blogcfg - check, export and scaffold blog site configuration.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, check, common::load_config, init, show};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match &cli.command {
        Commands::Check { load_args } => {
            let config = load_config(&cli.config, load_args)?;
            check::check_config(&config)
        }
        Commands::Show { load_args, args } => {
            let config = load_config(&cli.config, load_args)?;
            show::show_config(&config, args)
        }
        Commands::Init { name, dry } => init::new_config(name.as_deref(), *dry),
    }
}
