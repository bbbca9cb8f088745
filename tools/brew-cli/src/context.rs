//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use brew_commerce::catalog::Catalog;
use brew_commerce::config::CatalogConfig;
use brew_observability::{LogFormat, LogLevel, LogSink, SessionId, StructuredLogger};

use crate::output::Output;

/// Catalog file names picked up from the working directory tree.
const CATALOG_NAMES: [&str; 3] = ["brew.toml", ".brew.toml", "brew.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded catalog.
    pub catalog: Catalog,
    /// Where the catalog came from, `None` for the built-in one.
    pub source: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Diagnostic logger (stderr).
    pub logger: StructuredLogger,
}

impl Context {
    /// Load the catalog named on the command line, else the nearest catalog
    /// file in the directory tree, else the built-in coffee catalog.
    pub fn load(catalog_path: Option<&str>, output: Output) -> Result<Self> {
        let logger = cli_logger(output.is_verbose());

        let source = match catalog_path {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                find_catalog(&cwd)
            }
        };

        let catalog = match &source {
            Some(path) => load_catalog(path)?,
            None => Catalog::coffee_shop().context("Built-in catalog is invalid")?,
        };

        logger
            .debug_builder("catalog loaded")
            .field(
                "source",
                source
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string()),
            )
            .field_i64("products", catalog.len() as i64)
            .emit();

        Ok(Self {
            catalog,
            source,
            output,
            logger,
        })
    }
}

/// Parse and validate a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let config = CatalogConfig::load(path)
        .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
    Catalog::from_config(&config)
        .with_context(|| format!("Invalid catalog: {}", path.display()))
}

/// Find a catalog file in `start` or one of its parents.
fn find_catalog(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CATALOG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn cli_logger(verbose: bool) -> StructuredLogger {
    let level = if verbose { LogLevel::Debug } else { LogLevel::Warn };
    StructuredLogger::new(SessionId::generate())
        .with_component("brew-cli")
        .with_min_level(level)
        .with_format(LogFormat::Human)
        .with_sink(LogSink::Stderr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("brew-cli-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_catalog_file() {
        let dir = scratch_dir("load");
        let path = dir.join("shop.toml");
        std::fs::write(
            &path,
            r#"
[[products]]
slug = "cortado"
title = "Cortado"
thumbnail = "images/cortado.png"
sizes = [{ name = "Regular", price = 4.5 }]
"#,
        )
        .unwrap();

        let ctx = Context::load(path.to_str(), Output::new(false, true)).unwrap();
        assert_eq!(ctx.catalog.len(), 1);
        assert_eq!(ctx.source.as_deref(), Some(path.as_path()));

        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_missing_catalog_file() {
        let err = Context::load(Some("/nonexistent/brew.toml"), Output::new(false, true));
        assert!(err.is_err());
    }

    #[test]
    fn test_find_catalog_in_parent() {
        let dir = scratch_dir("find");
        let nested = dir.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.join("brew.toml"), "products = []").unwrap();

        assert_eq!(find_catalog(&nested), Some(dir.join("brew.toml")));

        std::fs::remove_dir_all(dir).ok();
    }
}
