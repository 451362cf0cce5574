use crate::paging::PageSize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Origin of the storefront API, without a trailing slash
    /// (e.g. `"http://localhost:8000"`). Also used to absolutize image paths.
    pub backend_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Image path shown when a product has no usable image.
    pub placeholder_image: String,
    pub default_page_size: PageSize,
}

impl AppConfig {
    /// Defaults used when no environment is configured at all.
    #[must_use]
    pub fn local() -> Self {
        Self {
            env: Environment::Development,
            log_level: "info".to_string(),
            backend_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 30,
            user_agent: "lapstore/0.1 (catalog-client)".to_string(),
            placeholder_image: "/placeholder.png".to_string(),
            default_page_size: PageSize::default(),
        }
    }
}
