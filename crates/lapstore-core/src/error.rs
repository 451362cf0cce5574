use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised when parsing catalog vocabulary (brands, sort keys, page sizes)
/// from user input or URL parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown brand: {0}")]
    UnknownBrand(String),

    #[error("unknown sort criterion: {0}")]
    UnknownSort(String),

    #[error("unsupported page size {0}: expected 15, 35 or 50")]
    UnsupportedPageSize(u32),

    #[error("unknown filter category: {0}")]
    UnknownCategory(String),
}
