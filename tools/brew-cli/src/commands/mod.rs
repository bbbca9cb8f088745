//! CLI command implementations.

pub mod check;
pub mod list;
pub mod quote;
pub mod show;

use clap::Args;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product slug (e.g. brown-sugar)
    pub slug: String,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Product slug
    pub slug: String,

    /// Size name (defaults to the featured size)
    #[arg(short, long)]
    pub size: Option<String>,

    /// Number of cups
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub quantity: u32,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Catalog file to validate (TOML or JSON)
    pub file: String,
}
