//! Waymark CLI - Command-line interface for waypoint path tables

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{colliders, export, import, info, tokens};

#[derive(Parser)]
#[command(name = "waymark")]
#[command(about = "Import, export and inspect waypoint path tables", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Read configuration from this file instead of the layered defaults
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a CSV path table
    Import {
        /// CSV file (or table name with --table)
        input: String,

        /// Write the imported paths to a TOML path document
        #[arg(short, long)]
        output: Option<String>,

        /// Fail on malformed rows instead of reading them as 0
        #[arg(long)]
        strict: bool,

        /// Import every path as a bezier path
        #[arg(long)]
        bezier: bool,

        /// Resolve the input name inside the configured table directory
        #[arg(long)]
        table: bool,
    },

    /// Export a TOML path document to CSV
    Export {
        /// Path document
        input: String,

        /// Output CSV file
        #[arg(short, long)]
        output: String,
    },

    /// Generate walk-collider placements for every path segment
    Colliders {
        /// Path document (.toml) or CSV table
        input: String,

        /// Output collider document; printed to stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the paths in a CSV table or path document
    Info {
        /// Path document (.toml) or CSV table
        input: String,
    },

    /// Print the whitespace-separated tokens of each line of a text table
    Tokens {
        /// Text file
        input: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Import {
            input,
            output,
            strict,
            bezier,
            table,
        } => import::run(
            import::ImportArgs {
                input,
                output,
                strict,
                bezier,
                table,
            },
            &config,
        ),
        Commands::Export { input, output } => export::run(&input, &output, &config),
        Commands::Colliders { input, output } => {
            colliders::run(&input, output.as_deref(), &config)
        }
        Commands::Info { input } => info::run(&input, &config),
        Commands::Tokens { input } => tokens::run(&input),
    }
}
