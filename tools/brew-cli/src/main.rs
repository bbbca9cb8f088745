//! Brew CLI - Command line tool for the coffee catalog.
//!
//! Commands:
//! - `brew list` - List products with their featured price
//! - `brew show` - Show one product and its sizes
//! - `brew quote` - Price a size and quantity
//! - `brew check` - Validate a catalog file

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CheckArgs, QuoteArgs, ShowArgs};

/// Brew CLI - Browse and validate coffee catalogs
#[derive(Parser)]
#[command(name = "brew")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Catalog file (TOML or JSON); defaults to the shipped coffee catalog
    #[arg(short, long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in catalog order
    List,

    /// Show a product and its sizes
    Show(ShowArgs),

    /// Price a size and quantity of a product
    Quote(QuoteArgs),

    /// Validate a catalog file
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let catalog = cli.catalog.as_deref();
    let result = match cli.command {
        Commands::List => load(catalog, &output).and_then(|ctx| commands::list::run(&ctx)),
        Commands::Show(args) => load(catalog, &output).and_then(|ctx| commands::show::run(args, &ctx)),
        Commands::Quote(args) => {
            load(catalog, &output).and_then(|ctx| commands::quote::run(args, &ctx))
        }
        Commands::Check(args) => commands::check::run(args, &output),
    };

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn load(catalog: Option<&str>, output: &output::Output) -> Result<context::Context> {
    context::Context::load(catalog, output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "brew", "--json", "quote", "brown-sugar", "--size", "Large", "--quantity", "3",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Quote(args) => {
                assert_eq!(args.slug, "brown-sugar");
                assert_eq!(args.size.as_deref(), Some("Large"));
                assert_eq!(args.quantity, 3);
            }
            _ => panic!("expected quote"),
        }
    }

    #[test]
    fn test_quantity_must_be_positive() {
        assert!(Cli::try_parse_from(["brew", "quote", "americano", "--quantity", "0"]).is_err());
    }

    #[test]
    fn test_global_catalog_flag() {
        let cli = Cli::try_parse_from(["brew", "list", "--catalog", "shop.toml"]).unwrap();
        assert_eq!(cli.catalog.as_deref(), Some("shop.toml"));
        assert!(matches!(cli.command, Commands::List));
    }
}
