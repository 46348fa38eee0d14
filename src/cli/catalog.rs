use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::CatalogIndex;
use crate::cli::OutputFormat;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub action: CatalogAction,

    /// Path to custom catalog file
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List all catalog items
    List,

    /// Show a single item by article
    Show {
        /// Article to look up
        article: String,
    },

    /// Export the catalog as versioned JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        CatalogIndex::load_from_file(path)?
    } else {
        CatalogIndex::load_embedded()?
    };

    if verbose {
        eprintln!("Loaded catalog with {} items", catalog.len());
    }

    match args.action {
        CatalogAction::List => list(&catalog, format)?,
        CatalogAction::Show { article } => show(&catalog, &article, format)?,
        CatalogAction::Export { output } => export(&catalog, output.as_deref())?,
    }

    Ok(())
}

fn list(catalog: &CatalogIndex, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.items())?);
        }
        OutputFormat::Text => {
            println!("{:<16} {:<10} NAME", "ARTICLE", "CATEGORY");
            for item in catalog.items() {
                println!(
                    "{:<16} {:<10} {}",
                    item.article,
                    item.category.as_deref().unwrap_or("-"),
                    item.name
                );
            }
            println!("\n{} items, {} key rows", catalog.len(), catalog.key_entries().len());
        }
    }
    Ok(())
}

fn show(catalog: &CatalogIndex, article: &str, format: OutputFormat) -> anyhow::Result<()> {
    let Some(item) = catalog.lookup_by_article(article) else {
        anyhow::bail!("article '{article}' not found in catalog");
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(item)?),
        OutputFormat::Text => {
            println!("Article:  {}", item.article);
            println!("Name:     {}", item.name);
            println!("Category: {}", item.category.as_deref().unwrap_or("-"));
            println!("Kind:     {}", item.kind.as_deref().unwrap_or("-"));
            println!("Diameter: {}", item.diameter.as_deref().unwrap_or("-"));
            println!("Price:    {}", item.price);
        }
    }
    Ok(())
}

fn export(catalog: &CatalogIndex, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let json = catalog.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            eprintln!("Wrote catalog to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
