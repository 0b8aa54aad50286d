use contracts::{Product, ProductsResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch the full product catalog
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&format!("{}/api/products", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    let payload = response
        .json::<ProductsResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(payload.products)
}
