//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - connects the API client
//! - runs the requested command (catalog listing, one-shot scoring, health, TUI)
//! - prints reports

use clap::Parser;

use crate::cli::{Command, HealthArgs, ScoreArgs, TypesArgs};
use crate::data::ApiClient;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lovetype` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `lovetype` to behave like `lovetype tui`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Types(args) => handle_types(args),
        Command::Score(args) => handle_score(args),
        Command::Health(args) => handle_health(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_types(args: TypesArgs) -> Result<(), AppError> {
    let client = ApiClient::connect(args.api.base_url)?;
    let types = client.fetch_types()?;
    print!("{}", crate::report::format_type_list(&types));
    Ok(())
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let client = ApiClient::connect(args.api.base_url.clone())?;
    let run = pipeline::run_score(&client, &args.type_a, &args.type_b)?;

    if args.raw {
        let json = serde_json::to_string_pretty(&run.payload)
            .map_err(|e| AppError::terminal(format!("Failed to serialize payload: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    print!(
        "{}",
        crate::report::format_score_report(&run, &args.type_a, &args.type_b)
    );
    Ok(())
}

fn handle_health(args: HealthArgs) -> Result<(), AppError> {
    let client = ApiClient::connect(args.api.base_url)?;
    let health = client.fetch_health()?;
    for (key, value) in &health {
        println!("{key}: {value}");
    }
    Ok(())
}

/// Rewrite argv so `lovetype` defaults to `lovetype tui`.
///
/// Rules:
/// - `lovetype`                      -> `lovetype tui`
/// - `lovetype --base-url URL`       -> `lovetype tui --base-url URL`
/// - `lovetype --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "types" | "score" | "health" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
