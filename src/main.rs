use clap::{Parser, Subcommand};
use std::env;
use version_selector::commands::*;
use version_selector::core::{command_init::Overrides, error::Result, print_error};

#[derive(Parser)]
#[command(name = "version-selector")]
#[command(about = "Drill down a hierarchical game-version API one level at a time")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Base URL of the version API (overrides config and VERSION_SELECTOR_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Route under which the version hierarchy lives (e.g. "/game-versions")
    #[arg(long, global = true, value_name = "PATH")]
    resource_root: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a version interactively, level by level
    Select {
        /// Segments to preselect before prompting (e.g. "paper 1.21")
        segments: Vec<String>,
        /// Print the resolved selection as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the options at a path
    Options {
        /// Path segments (option text or 1-based number per level)
        segments: Vec<String>,
    },
    /// Resolve a complete path without prompting
    Resolve {
        /// Path segments (option text or 1-based number per level)
        #[arg(required = true)]
        segments: Vec<String>,
        /// Print the resolved selection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the last resolved selection
    Last {
        /// Print the saved record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the configuration; --api-url, --resource-root and --timeout are saved
    Config {
        /// Request timeout in seconds (at least 1)
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let overrides = Overrides {
        api_url: cli.api_url,
        resource_root: cli.resource_root,
    };

    let result = match cli.command {
        Commands::Select { segments, json } => execute_select(&overrides, segments, json),
        Commands::Options { segments } => execute_options(&overrides, segments),
        Commands::Resolve { segments, json } => execute_resolve(&overrides, segments, json),
        Commands::Last { json } => execute_last(&overrides, json),
        Commands::Config { timeout } => execute_config(&overrides, timeout),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
