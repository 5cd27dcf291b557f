//! NEC - the Node Ecosystem CLI
//!
//! Walks the user through creating a new project folder with optional git,
//! npm/yarn, and framework template setup.

mod banner;
mod cli;
mod commands;
mod output;
mod prompt;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::Parser;
use nec_core::{HierarchicalConfigLoader, RuntimeConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use commands::Context;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    if !config.display.color_enabled {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let ctx = Context::new(config, cli.directory, cli.no_banner)?;

    match cli.command {
        None | Some(Commands::Wizard) => commands::wizard::run(&ctx).await,
        Some(Commands::New(args)) => commands::new::run(&ctx, args).await,
        Some(Commands::Templates(args)) => {
            commands::templates::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig> {
    let mut loader = HierarchicalConfigLoader::new().context("Failed to locate config directory")?;
    if let Some(path) = &cli.config {
        loader = loader.with_file(path.clone());
    }
    let config = loader
        .load_runtime_config()
        .context("Failed to load configuration")?;
    tracing::debug!("Runtime config: {:?}", config);
    Ok(config)
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Warnings only by default so log lines don't interleave with prompts
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
