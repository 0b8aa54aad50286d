use serde::{Deserialize, Serialize};

/// Товар из каталога — то подмножество полей внешнего API, которое
/// использует демо. Неизвестные поля источника игнорируются при разборе.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: f64,
}

/// Ответ продуктового эндпоинта: `{ "products": [...], "total": n, ... }`.
///
/// Счётчики опциональны — голый `{ "products": [...] }` тоже разбирается.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

impl ProductsResponse {
    pub fn new(products: Vec<Product>) -> Self {
        let total = products.len() as u32;
        Self {
            products,
            total,
            skip: 0,
            limit: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_upstream_payload_with_extra_fields() {
        let json = r#"{
            "products": [
                {
                    "id": 1,
                    "title": "Essence Mascara Lash Princess",
                    "category": "beauty",
                    "brand": "Essence",
                    "price": 9.99,
                    "rating": 4.94,
                    "stock": 5,
                    "thumbnail": "https://example.com/1.png"
                }
            ],
            "total": 194,
            "skip": 0,
            "limit": 30
        }"#;

        let parsed: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.total, 194);
        assert_eq!(parsed.products.len(), 1);
        assert_eq!(parsed.products[0].title, "Essence Mascara Lash Princess");
        assert_eq!(parsed.products[0].brand.as_deref(), Some("Essence"));
    }

    #[test]
    fn test_parses_bare_products_payload() {
        let json = r#"{ "products": [{ "id": 7, "title": "Chair", "category": "furniture" }] }"#;

        let parsed: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.total, 0);
        assert_eq!(parsed.skip, 0);
        assert_eq!(parsed.products[0].id, 7);
        assert_eq!(parsed.products[0].brand, None);
        assert_eq!(parsed.products[0].price, 0.0);
    }

    #[test]
    fn test_new_fills_counters_from_list() {
        let resp = ProductsResponse::new(vec![
            Product {
                id: 1,
                title: "A".into(),
                category: "c".into(),
                brand: None,
                price: 1.0,
            },
            Product {
                id: 2,
                title: "B".into(),
                category: "c".into(),
                brand: None,
                price: 2.0,
            },
        ]);
        assert_eq!(resp.total, 2);
        assert_eq!(resp.limit, 2);
    }
}
