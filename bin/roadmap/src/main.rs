//! Roadmap CLI
//!
//! Static snapshot builds, content validation and catalog search for the
//! Docker roadmap guide.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for the roadmap guide.
#[derive(Parser)]
#[command(name = "roadmap", version, about = "Docker roadmap study guide tools")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "roadmap.toml")]
    config: PathBuf,

    /// Alternate content file instead of the built-in catalog
    #[arg(long)]
    content: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Render the guide to a static HTML page
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only include topics matching this query
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
        /// Directory holding the asset photo folder (e.g. public)
        #[arg(long)]
        assets: Option<PathBuf>,
    },
    /// Print the groups and topics matching a query
    Search {
        /// Case-insensitive substring to look for
        query: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    roadmap::init_tracing(cli.verbose);

    let content = cli.content.as_deref();

    match cli.command {
        Commands::Build { output, query } => {
            roadmap::cmd::build::run(&cli.config, content, output.as_deref(), query.as_deref())?;
        }
        Commands::Check { strict, assets } => {
            roadmap::cmd::check::run(&cli.config, content, strict, assets.as_deref())?;
        }
        Commands::Search { query } => {
            roadmap::cmd::search::run(content, &query)?;
        }
    }

    Ok(())
}
