//! Application state built once at mount and shared through context.

use std::sync::Arc;

use brew_commerce::catalog::Catalog;
use brew_observability::{LogSink, StructuredLogger};

use crate::config::StorefrontConfig;

/// Everything the pages read: settings, the catalog and the logger.
///
/// Pages get this from context instead of reaching for globals, so a test
/// or an alternate deployment can mount the app over a different catalog.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: Arc<StorefrontConfig>,
    pub catalog: Arc<Catalog>,
    pub logger: StructuredLogger,
}

impl Storefront {
    /// Assemble state from explicit parts.
    pub fn new(config: StorefrontConfig, catalog: Catalog, sink: LogSink) -> Self {
        let logger = config.logging.logger("storefront", sink);
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            logger,
        }
    }

    /// Load the embedded settings and the shipped coffee catalog.
    ///
    /// A broken embedded document falls back to defaults (or an empty
    /// catalog) and is reported through the logger.
    pub fn load() -> Self {
        let sink = LogSink::console(|line| leptos::logging::log!("{}", line));

        let (config, config_error) = match StorefrontConfig::embedded() {
            Ok(config) => (config, None),
            Err(e) => (StorefrontConfig::default(), Some(e.to_string())),
        };
        let (catalog, catalog_error) = match Catalog::coffee_shop() {
            Ok(catalog) => (catalog, None),
            Err(e) => (Catalog::default(), Some(e.to_string())),
        };

        let storefront = Self::new(config, catalog, sink);

        if let Some(error) = config_error {
            storefront
                .logger
                .error_builder("storefront settings invalid, using defaults")
                .field("error", error)
                .emit();
        }
        if let Some(error) = catalog_error {
            storefront
                .logger
                .error_builder("catalog invalid, serving an empty catalog")
                .field("error", error)
                .emit();
        }

        storefront.announce();
        storefront
    }

    /// Log the startup summary.
    pub fn announce(&self) {
        self.logger
            .info_builder("storefront ready")
            .field("store", self.config.store.name.as_str())
            .field_i64("products", self.catalog.len() as i64)
            .field_bool("motion", self.config.motion.enabled)
            .emit();
    }
}
