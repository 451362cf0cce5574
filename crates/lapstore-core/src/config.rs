use crate::app_config::{AppConfig, Environment};
use crate::paging::PageSize;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = AppConfig::local();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("LAPSTORE_ENV", "development"))
        .ok_or_else(|| invalid("LAPSTORE_ENV", "expected development, test or production".into()))?;

    let log_level = or_default("LAPSTORE_LOG_LEVEL", &defaults.log_level);

    let backend_url = or_default("LAPSTORE_BACKEND_URL", &defaults.backend_url);
    if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
        return Err(invalid(
            "LAPSTORE_BACKEND_URL",
            format!("\"{backend_url}\" is not an http(s) URL"),
        ));
    }
    let backend_url = backend_url.trim_end_matches('/').to_string();

    let request_timeout_secs =
        parse_u64("LAPSTORE_REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "LAPSTORE_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".into(),
        ));
    }

    let user_agent = or_default("LAPSTORE_USER_AGENT", &defaults.user_agent);
    let placeholder_image = or_default("LAPSTORE_PLACEHOLDER_IMAGE", &defaults.placeholder_image);
    if placeholder_image.trim().is_empty() {
        return Err(invalid("LAPSTORE_PLACEHOLDER_IMAGE", "must not be blank".into()));
    }

    let default_page_size = match lookup("LAPSTORE_DEFAULT_PAGE_SIZE") {
        Ok(raw) => {
            let n = raw
                .parse::<u32>()
                .map_err(|e| invalid("LAPSTORE_DEFAULT_PAGE_SIZE", e.to_string()))?;
            PageSize::try_from(n)
                .map_err(|e| invalid("LAPSTORE_DEFAULT_PAGE_SIZE", e.to_string()))?
        }
        Err(_) => defaults.default_page_size,
    };

    Ok(AppConfig {
        env,
        log_level,
        backend_url,
        request_timeout_secs,
        user_agent,
        placeholder_image,
        default_page_size,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Option<Environment> {
    match s {
        "development" => Some(Environment::Development),
        "test" => Some(Environment::Test),
        "production" => Some(Environment::Production),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
