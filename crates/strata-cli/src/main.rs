//! # strata CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use strata_cli::schema::{run_schema, SchemaArgs};
use strata_cli::validate::{run_validate, ValidateArgs};

/// Strata content toolchain.
///
/// Validates content entries against their collection schemas and exports
/// the compiled schemas for external tooling.
#[derive(Parser, Debug)]
#[command(name = "strata", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site root. Defaults to walking up from the current directory.
    #[arg(long, global = true)]
    site_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate content entries against their collection schemas.
    Validate(ValidateArgs),

    /// Inspect and export the compiled collection schemas.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let site_root = cli.site_root.clone().or_else(resolve_site_root);
    let site_root = site_root.unwrap_or_else(|| {
        tracing::warn!("could not locate site root; using current directory");
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    });

    tracing::debug!(site_root = %site_root.display(), "resolved site root");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &site_root),
        Commands::Schema(args) => run_schema(&args, &site_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Walk up from the current directory to find the site root.
///
/// The site root is identified by a `strata.yaml` file or a `content/`
/// directory.
fn resolve_site_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut dir = cwd.as_path();
    loop {
        if dir.join(strata_cli::config::CONFIG_FILE).is_file() || dir.join("content").is_dir() {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
