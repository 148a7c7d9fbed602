//! gamedoc command line tool
//!
//! Usage:
//!   gamedoc inspect game.json
//!   gamedoc load-order game.json
//!   gamedoc resave game.json -o upgraded.json --tool-version 4.1.0.0
//!
//! Problems found while loading are logged and listed in the output; only
//! unreadable files make the command fail.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gamedoc_types::DocumentVersion;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "gamedoc")]
#[command(about = "Inspect and upgrade game project documents")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Platform registry file (TOML). Defaults to the built-in registry
    #[arg(short, long, global = true)]
    registry: Option<PathBuf>,

    /// Version of the tool, used for compatibility rules and stamped on save
    #[arg(long, global = true, default_value_t = DocumentVersion::CURRENT)]
    tool_version: DocumentVersion,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a project and print a JSON summary
    Inspect { file: PathBuf },

    /// Print the order in which extensions are implemented on load
    LoadOrder { file: PathBuf },

    /// Load a project and save it again at the tool version
    Resave {
        file: PathBuf,

        /// Where to write the saved project
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let registry = gamedoc_cli::load_registry(args.registry.as_deref())?;

    match args.command {
        Command::Inspect { file } => {
            let summary = gamedoc_cli::inspect(&file, registry, args.tool_version)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::LoadOrder { file } => {
            let order = gamedoc_cli::load_order(&file, registry, args.tool_version)?;
            for name in &order.order {
                println!("{name}");
            }
            if !order.unresolved.is_empty() {
                warn!(
                    "Not ordered (dependency cycle): {}",
                    order.unresolved.join(", ")
                );
            }
        }
        Command::Resave { file, output } => {
            let report =
                gamedoc_cli::resave(&file, &output, registry, args.tool_version)?;
            println!(
                "Saved {} ({} warnings, {} errors)",
                output.display(),
                report.warnings().count(),
                report.errors().count()
            );
        }
    }

    Ok(())
}
