use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Адрес внешнего продуктового API (формат ответа — как у dummyjson).
    /// Если не задан, сервер отдаёт встроенный демо-каталог.
    #[serde(default)]
    pub upstream_url: Option<String>,
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout_secs: u64,
}

fn default_port() -> u16 {
    3000
}

fn default_upstream_timeout() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            upstream_url: None,
            upstream_timeout_secs: default_upstream_timeout(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[catalog]
# upstream_url = "https://dummyjson.com/products"
upstream_timeout_secs = 10
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.upstream_url, None);
        assert_eq!(config.catalog.upstream_timeout_secs, 10);
    }

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.catalog.upstream_timeout_secs, 10);
    }

    #[test]
    fn test_upstream_url_is_read_when_present() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            upstream_url = "https://dummyjson.com/products"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.catalog.upstream_url.as_deref(),
            Some("https://dummyjson.com/products")
        );
    }
}
