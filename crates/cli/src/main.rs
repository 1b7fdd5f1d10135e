use anyhow::{Context, Result};
use catalog::{Item, load_items, sample_items};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filtering::{Filter, SpecFilter, parse_specification};
use std::path::{Path, PathBuf};

/// spec-filter - Filter items with composable specifications
#[derive(Parser)]
#[command(name = "spec-filter")]
#[command(
    about = "Filter items by color, size and name with AND/OR expressions",
    long_about = None
)]
struct Cli {
    /// JSON file holding an array of items (defaults to the built-in sample)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the names of items matching an expression
    Filter {
        /// Filter expression, e.g. "color=white AND size=huge"
        expression: String,
    },

    /// Show how an expression was parsed and how many items it matches
    Explain {
        /// Filter expression to explain
        expression: String,
    },

    /// List every item in the dataset
    List,
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let items = load_dataset(cli.dataset.as_deref())?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter { expression } => handle_filter(&items, &expression)?,
        Commands::Explain { expression } => handle_explain(&items, &expression)?,
        Commands::List => handle_list(&items),
    }

    Ok(())
}

/// Load the dataset file, or fall back to the sample items
fn load_dataset(path: Option<&Path>) -> Result<Vec<Item>> {
    match path {
        Some(path) => load_items(path)
            .with_context(|| format!("Failed to load dataset {}", path.display())),
        None => {
            tracing::debug!("No dataset given, using sample items");
            Ok(sample_items())
        }
    }
}

/// Names of the items matching `expression`, in dataset order
fn matching_names(items: &[Item], expression: &str) -> Result<Vec<String>> {
    let spec = parse_specification(expression)
        .with_context(|| format!("Invalid filter expression '{}'", expression))?;
    Ok(SpecFilter
        .filter(items, spec.as_ref())
        .into_iter()
        .map(|item| item.name.clone())
        .collect())
}

/// Handle the 'filter' command
fn handle_filter(items: &[Item], expression: &str) -> Result<()> {
    for name in matching_names(items, expression)? {
        println!("{}", name);
    }
    Ok(())
}

/// Parsed description of `expression` and the items it matches
fn explain_expression<'a>(items: &'a [Item], expression: &str) -> Result<(String, Vec<&'a Item>)> {
    let spec = parse_specification(expression)
        .with_context(|| format!("Invalid filter expression '{}'", expression))?;
    let matches = SpecFilter.filter(items, spec.as_ref());
    Ok((spec.describe(), matches))
}

/// Handle the 'explain' command
fn handle_explain(items: &[Item], expression: &str) -> Result<()> {
    let (description, matches) = explain_expression(items, expression)?;

    println!("{} {}", "Parsed:".bold().blue(), description);
    println!(
        "{} {} of {} items",
        "Matches:".bold().blue(),
        matches.len().to_string().green(),
        items.len()
    );
    for item in matches {
        println!("  {} {}", "•".green(), item);
    }
    Ok(())
}

/// Handle the 'list' command
fn handle_list(items: &[Item]) {
    println!("{}", format!("{} items:", items.len()).bold().blue());
    for (rank, item) in items.iter().enumerate() {
        println!("{}. {}", (rank + 1).to_string().green(), item);
    }
}
