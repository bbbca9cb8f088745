//! Check command implementation.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::context::load_catalog;
use crate::output::Output;

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    file: &'a str,
    valid: bool,
    products: usize,
    currency: String,
}

/// Run the check command.
pub fn run(args: super::CheckArgs, output: &Output) -> Result<()> {
    output.debug(&format!("Checking {}", args.file));

    let catalog = load_catalog(Path::new(&args.file))?;

    if output.is_json() {
        output.json(&CheckReport {
            file: &args.file,
            valid: true,
            products: catalog.len(),
            currency: catalog.currency().to_string(),
        });
        return Ok(());
    }

    if catalog.is_empty() {
        output.warn("Catalog is valid but has no products");
    }
    output.success(&format!(
        "{} is valid: {} product(s) in {}",
        args.file,
        catalog.len(),
        catalog.currency().code()
    ));

    Ok(())
}
