//! Command-line parsing for the Lovetype terminal client.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the interpretation code.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "lovetype",
    version,
    about = "Terminal client for the Lovetype compatibility API"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print the selectable type catalog.
    Types(TypesArgs),
    /// Submit one pair for scoring and print the result report.
    Score(ScoreArgs),
    /// Query the service health endpoint.
    Health(HealthArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same scoring pipeline as `lovetype score`, but renders
    /// the result as a radar chart and summary panel in a terminal UI.
    Tui(TuiArgs),
}

/// Connection options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct ApiArgs {
    /// API base URL (overrides LOVETYPE_API_BASE).
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

#[derive(Debug, Parser)]
pub struct TypesArgs {
    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Your type.
    #[arg(short = 'a', long = "type-a", value_name = "TYPE")]
    pub type_a: String,

    /// Your partner's type.
    #[arg(short = 'b', long = "type-b", value_name = "TYPE")]
    pub type_b: String,

    /// Dump the raw payload JSON instead of the formatted report.
    #[arg(long)]
    pub raw: bool,

    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Debug, Parser)]
pub struct HealthArgs {
    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Debug, Parser)]
pub struct TuiArgs {
    #[command(flatten)]
    pub api: ApiArgs,
}
