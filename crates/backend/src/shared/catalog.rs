use chrono::{DateTime, Utc};
use contracts::{Product, ProductsResponse};
use once_cell::sync::OnceCell;
use thiserror::Error;

use super::config::CatalogConfig;

/// Ошибки загрузки каталога
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream returned HTTP {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("upstream payload contained no products")]
    EmptyUpstream,

    #[error("catalog is not initialized")]
    NotInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Seed,
    Upstream,
}

/// Продуктовый каталог в памяти. Заполняется один раз на старте,
/// обработчики его только читают.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    source: CatalogSource,
    refreshed_at: DateTime<Utc>,
}

impl Catalog {
    fn new(products: Vec<Product>, source: CatalogSource) -> Self {
        Self {
            products,
            source,
            refreshed_at: Utc::now(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }
}

static CATALOG: OnceCell<Catalog> = OnceCell::new();

/// Инициализация каталога на старте сервера.
///
/// Если upstream задан в конфиге — пробуем его; любая ошибка деградирует
/// до встроенного демо-набора, сервер при этом стартует нормально.
pub async fn initialize_catalog(config: &CatalogConfig) -> anyhow::Result<()> {
    let catalog = match &config.upstream_url {
        Some(url) => match fetch_upstream(url, config.upstream_timeout_secs).await {
            Ok(products) => {
                tracing::info!(
                    "catalog: loaded {} products from upstream {}",
                    products.len(),
                    url
                );
                Catalog::new(products, CatalogSource::Upstream)
            }
            Err(e) => {
                tracing::warn!("catalog: upstream fetch failed ({}), using embedded seed", e);
                Catalog::new(seed_products(), CatalogSource::Seed)
            }
        },
        None => {
            tracing::info!("catalog: upstream not configured, using embedded seed");
            Catalog::new(seed_products(), CatalogSource::Seed)
        }
    };

    tracing::info!(
        "catalog: ready with {} products (refreshed at {})",
        catalog.products.len(),
        catalog.refreshed_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    CATALOG
        .set(catalog)
        .map_err(|_| anyhow::anyhow!("catalog already initialized"))?;
    Ok(())
}

pub fn get() -> Result<&'static Catalog, CatalogError> {
    CATALOG.get().ok_or(CatalogError::NotInitialized)
}

async fn fetch_upstream(url: &str, timeout_secs: u64) -> Result<Vec<Product>, CatalogError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(CatalogError::UpstreamStatus(response.status()));
    }

    let payload: ProductsResponse = response.json().await?;
    if payload.products.is_empty() {
        return Err(CatalogError::EmptyUpstream);
    }
    Ok(payload.products)
}

/// Встроенный демо-набор — первые позиции публичного dummyjson-каталога.
pub fn seed_products() -> Vec<Product> {
    fn p(id: u32, title: &str, category: &str, brand: Option<&str>, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            category: category.to_string(),
            brand: brand.map(str::to_string),
            price,
        }
    }

    vec![
        p(1, "Essence Mascara Lash Princess", "beauty", Some("Essence"), 9.99),
        p(2, "Eyeshadow Palette with Mirror", "beauty", Some("Glamour Beauty"), 19.99),
        p(3, "Powder Canister", "beauty", Some("Velvet Touch"), 14.99),
        p(4, "Red Lipstick", "beauty", Some("Chic Cosmetics"), 12.99),
        p(5, "Red Nail Polish", "beauty", Some("Nail Couture"), 8.99),
        p(6, "Calvin Klein CK One", "fragrances", Some("Calvin Klein"), 49.99),
        p(7, "Chanel Coco Noir Eau De", "fragrances", Some("Chanel"), 129.99),
        p(8, "Annibale Colombo Bed", "furniture", Some("Annibale Colombo"), 1899.99),
        p(9, "Annibale Colombo Sofa", "furniture", Some("Annibale Colombo"), 2499.99),
        p(10, "Bedside Table African Cherry", "furniture", Some("Furniture Co."), 299.99),
        p(11, "Apple", "groceries", None, 1.99),
        p(12, "Cucumber", "groceries", None, 1.49),
    ]
}
