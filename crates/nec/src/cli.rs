//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// NEC - the Node Ecosystem CLI
#[derive(Parser, Debug)]
#[command(name = "nec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (default: ~/.nec/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Skip the welcome banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Create projects inside this directory instead of the current one
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<Utf8PathBuf>,

    /// Defaults to the interactive wizard
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive project wizard
    Wizard,

    /// Create a project without prompting
    New(NewArgs),

    /// List available framework templates
    Templates(TemplatesArgs),
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project (directory) name
    pub name: String,

    /// Initialize a git repository
    #[arg(long)]
    pub git: bool,

    /// Initialize a Node.js package
    #[arg(long)]
    pub node: bool,

    /// Use yarn instead of npm (implies --node)
    #[arg(long)]
    pub yarn: bool,

    /// Scaffold from a framework template (implies --node); see `nec templates`
    #[arg(short, long)]
    pub template: Option<String>,
}

#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
