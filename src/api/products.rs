//! Product listing endpoint.

use axum::extract::Extension;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::catalog::{Catalog, Product};

/// List the full fixed catalog as a JSON array of `{id, name, price, category}`.
async fn list_products(Extension(catalog): Extension<Arc<Catalog>>) -> Json<Vec<Product>> {
    Json(catalog.list().to_vec())
}

/// Create product routes
pub fn products_routes() -> Router {
    Router::new().route("/api/products", get(list_products))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_products_returns_fixed_catalog() {
        let catalog = Arc::new(Catalog::new());
        let Json(products) = list_products(Extension(catalog)).await;

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Elite Luxury Watch");
        assert_eq!(products[2].price, 499);
    }

    #[tokio::test]
    async fn test_list_products_json_shape() {
        let catalog = Arc::new(Catalog::new());
        let Json(products) = list_products(Extension(catalog)).await;

        let json = serde_json::to_value(&products).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"id": 1, "name": "Elite Luxury Watch", "price": 1299, "category": "Watches"},
                {"id": 2, "name": "Designer Handbag", "price": 899, "category": "Handbags"},
                {"id": 3, "name": "Premium Sunglasses", "price": 499, "category": "Sunglasses"}
            ])
        );
    }
}
