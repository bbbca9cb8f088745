//! Navigation paths.

/// Path of the product list.
pub const HOME_PATH: &str = "/";

/// Prefix every product detail path starts with.
pub const PRODUCT_ROUTE_PREFIX: &str = "/product/";

/// Path of the detail view for a product slug.
pub fn product_path(slug: &str) -> String {
    format!("{PRODUCT_ROUTE_PREFIX}{slug}")
}

/// Extract the slug from a product detail path.
///
/// Query strings and fragments are ignored; nested paths are not product
/// paths.
pub fn parse_product_path(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let slug = path.strip_prefix(PRODUCT_ROUTE_PREFIX)?;
    let slug = slug.strip_suffix('/').unwrap_or(slug);
    if slug.is_empty() || slug.contains('/') {
        None
    } else {
        Some(slug)
    }
}
