//! Cache key generators for consistent key naming.

use catalog_core::ProductId;

/// Key holding the full product listing.
pub const ALL_PRODUCTS: &str = "products:all";

/// Generate a cache key for a product by ID.
#[must_use]
pub fn product_by_id(id: ProductId) -> String {
    format!("product:{id}")
}

/// Pattern matching every single-product entry.
#[must_use]
pub fn product_pattern() -> String {
    "product:*".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_by_id_key() {
        assert_eq!(product_by_id(ProductId(42)), "product:42");
    }

    #[test]
    fn test_listing_key_is_outside_product_pattern() {
        // "products:all" must not be caught by a "product:*" sweep
        let pattern = product_pattern();
        let prefix = pattern.trim_end_matches('*');
        assert!(!ALL_PRODUCTS.starts_with(prefix));
        assert!(product_by_id(ProductId(1)).starts_with(prefix));
    }
}
