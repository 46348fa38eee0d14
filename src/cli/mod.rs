//! Command-line interface for shaft-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **select**: Resolve a JSON configuration request into a bill of materials
//! - **catalog**: List, show, or export items from the parts catalog
//! - **serve**: Start the interactive web interface
//!
//! ## Usage
//!
//! ```text
//! # Resolve a request from a file
//! shaft-solver select request.json
//!
//! # Pipe a request from stdin
//! echo '{"shaft":"vbv","diameter":710,"valve":"dvustv"}' | shaft-solver select -
//!
//! # JSON output for scripting
//! shaft-solver select request.json --format json
//!
//! # Inspect the catalog
//! shaft-solver catalog list
//! shaft-solver catalog show VB-710-1M
//!
//! # Start web UI
//! shaft-solver serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod catalog;
pub mod select;

#[derive(Parser)]
#[command(name = "shaft-solver")]
#[command(version)]
#[command(about = "Resolve ventilation shaft configurations into a bill of materials")]
#[command(
    long_about = "shaft-solver turns a partial ventilation-shaft specification into a concrete bill of materials.\n\nIt validates and coerces the requested parameters against the catalog's compatibility rules, then resolves the base assembly and every requested accessory through layered fallback searches, reporting:\n- The selected articles with quantities\n- Correction notices for coerced parameters\n- Diagnostics for positions with no catalog match"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a configuration request into a bill of materials
    Select(select::SelectArgs),

    /// Manage the parts catalog
    Catalog(catalog::CatalogArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
