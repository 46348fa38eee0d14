use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::CatalogIndex;
use crate::cli::OutputFormat;
use crate::core::request::RawRequest;
use crate::resolve::{Resolution, ResolutionEngine};

#[derive(Args)]
pub struct SelectArgs {
    /// JSON request file; use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute select subcommand
///
/// # Errors
///
/// Returns an error if the request cannot be read or parsed, or the
/// catalog cannot be loaded.
pub fn run(args: SelectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let request = read_request(&args)?;

    let catalog = if let Some(path) = &args.catalog {
        CatalogIndex::load_from_file(path)?
    } else {
        CatalogIndex::load_embedded()?
    };

    if verbose {
        eprintln!(
            "Loaded catalog with {} items, {} key rows",
            catalog.len(),
            catalog.key_entries().len()
        );
    }

    let engine = ResolutionEngine::new(&catalog);
    let resolution = engine.resolve(&request);

    match format {
        OutputFormat::Json => print_json(&resolution)?,
        OutputFormat::Text => print_text(&resolution),
    }

    Ok(())
}

fn read_request(args: &SelectArgs) -> anyhow::Result<RawRequest> {
    let content = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };
    Ok(serde_json::from_str(&content)?)
}

fn print_json(resolution: &Resolution) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(resolution)?);
    Ok(())
}

fn print_text(resolution: &Resolution) {
    if resolution.items.is_empty() {
        println!("No items resolved.");
    } else {
        println!("{:<16} {:>4}  NAME", "ARTICLE", "QTY");
        for line in &resolution.items {
            println!("{:<16} {:>4}  {}", line.article, line.quantity, line.name);
        }
    }

    if !resolution.notices.is_empty() {
        println!();
        for notice in &resolution.notices {
            println!("note: {notice}");
        }
    }
}
