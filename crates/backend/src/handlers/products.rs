use axum::Json;
use contracts::ProductsResponse;

use crate::shared::catalog;

/// GET /api/products
pub async fn list_all() -> Result<Json<ProductsResponse>, axum::http::StatusCode> {
    match catalog::get() {
        Ok(catalog) => Ok(Json(ProductsResponse::new(catalog.products().to_vec()))),
        Err(e) => {
            tracing::error!("products list failed: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::seed_products;
    use crate::shared::config::CatalogConfig;

    #[tokio::test]
    async fn test_list_all_returns_seed_payload() {
        // Каталог — процессный синглтон; повторная инициализация в другом
        // тесте бинарника допустима и просто вернёт ошибку "already
        // initialized", поэтому результат здесь не проверяем.
        let _ = catalog::initialize_catalog(&CatalogConfig::default()).await;

        let Json(payload) = list_all().await.unwrap();
        assert_eq!(payload.products.len(), seed_products().len());
        assert_eq!(payload.total as usize, payload.products.len());
        assert_eq!(payload.products[0].title, "Essence Mascara Lash Princess");
    }
}
