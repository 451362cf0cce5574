//! Backend base-URL validation for the storefront client.

use crate::error::ClientError;

/// Validates `base_url` and returns it without a trailing slash.
///
/// Given `"http://localhost:8000/"`, returns `"http://localhost:8000"`. A path
/// prefix is kept (`"https://shop.vn/api/"` → `"https://shop.vn/api"`) so
/// deployments behind a reverse proxy work. Query strings and fragments are
/// dropped.
///
/// # Errors
///
/// Returns [`ClientError::InvalidBaseUrl`] if the URL does not parse or is
/// not http(s).
pub fn normalize_base_url(base_url: &str) -> Result<String, ClientError> {
    let invalid = |reason: String| ClientError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let url = reqwest::Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }

    let origin = url.origin().ascii_serialization();
    let path = url.path().trim_end_matches('/');
    Ok(format!("{origin}{path}"))
}

/// Extracts the hostname from a URL for log fields, falling back to the input.
pub(super) fn extract_host(url: &str) -> String {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned())
}
