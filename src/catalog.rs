//! Fixed in-memory product catalog.
//!
//! Stand-in for a real product database: a hardcoded list created at startup
//! and never mutated for the lifetime of the process.

use serde::Serialize;

/// A catalog entry. Ids are unique and stable for the process lifetime.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: u32,
    pub category: &'static str,
}

/// The fixed product list served by `/api/products` and summarized by the
/// chat hub for product queries.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    name: "Elite Luxury Watch",
                    price: 1299,
                    category: "Watches",
                },
                Product {
                    id: 2,
                    name: "Designer Handbag",
                    price: 899,
                    category: "Handbags",
                },
                Product {
                    id: 3,
                    name: "Premium Sunglasses",
                    price: 499,
                    category: "Sunglasses",
                },
            ],
        }
    }

    /// Full fixed list, every call. No pagination, no filtering.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Render each product as `"<name> - $<price>"`, joined with `", "`.
    #[must_use]
    pub fn format_summary(&self) -> String {
        self.products
            .iter()
            .map(|p| format!("{} - ${}", p.name, p.price))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_products_with_unique_ids() {
        let catalog = Catalog::new();
        let products = catalog.list();
        assert_eq!(products.len(), 3);

        let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_format_summary_exact_output() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.format_summary(),
            "Elite Luxury Watch - $1299, Designer Handbag - $899, Premium Sunglasses - $499"
        );
    }

    #[test]
    fn test_format_summary_idempotent() {
        let catalog = Catalog::new();
        assert_eq!(catalog.format_summary(), catalog.format_summary());
    }

    #[test]
    fn test_product_serialization_shape() {
        let catalog = Catalog::new();
        let json = serde_json::to_value(catalog.list()).unwrap();
        assert_eq!(
            json[0],
            serde_json::json!({
                "id": 1,
                "name": "Elite Luxury Watch",
                "price": 1299,
                "category": "Watches"
            })
        );
    }
}
