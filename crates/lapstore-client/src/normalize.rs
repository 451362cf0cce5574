//! Conversion from raw API products to [`lapstore_core::ProductDisplayRecord`].
//!
//! `product_images` is resolved exactly once here into [`ProductImages`];
//! nothing downstream sees the raw JSON value.

use lapstore_core::ProductDisplayRecord;

use crate::types::RawProduct;

/// Resolved shape of a product's `product_images` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductImages {
    /// Relative image paths, in display order. May be empty.
    Paths(Vec<String>),
    /// Field was `null` or absent.
    Missing,
    /// Field was present but not a list of strings.
    Malformed(String),
}

impl ProductImages {
    /// Resolves the raw field value.
    ///
    /// Accepts a JSON array of strings, or a string holding a JSON-encoded
    /// array of strings. An empty string is treated as an empty list.
    #[must_use]
    pub fn resolve(raw: Option<&serde_json::Value>) -> Self {
        match raw {
            None | Some(serde_json::Value::Null) => Self::Missing,
            Some(serde_json::Value::String(encoded)) => {
                if encoded.trim().is_empty() {
                    return Self::Paths(Vec::new());
                }
                match serde_json::from_str::<serde_json::Value>(encoded) {
                    Ok(serde_json::Value::Array(items)) => Self::from_array(&items),
                    Ok(other) => Self::Malformed(format!("encoded {}", json_kind(&other))),
                    Err(e) => Self::Malformed(e.to_string()),
                }
            }
            Some(serde_json::Value::Array(items)) => Self::from_array(items),
            Some(other) => Self::Malformed(format!("unexpected {}", json_kind(other))),
        }
    }

    fn from_array(items: &[serde_json::Value]) -> Self {
        let paths: Option<Vec<String>> = items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect();
        match paths {
            Some(paths) => Self::Paths(paths),
            None => Self::Malformed("non-string image entry".to_string()),
        }
    }

    /// First usable image path, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Paths(paths) => paths
                .first()
                .map(String::as_str)
                .filter(|p| !p.trim().is_empty()),
            Self::Missing | Self::Malformed(_) => None,
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Builds absolute image URLs for display records.
#[derive(Debug, Clone)]
pub struct ImageLocator {
    backend_url: String,
    placeholder: String,
}

impl ImageLocator {
    /// `backend_url` should already be normalized (no trailing slash), as
    /// returned by [`crate::StorefrontClient::base_url`].
    #[must_use]
    pub fn new(backend_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Backend URL joined with the first image path, or the placeholder.
    #[must_use]
    pub fn image_source(&self, images: &ProductImages) -> String {
        match images.first() {
            Some(path) if path.starts_with('/') => format!("{}{path}", self.backend_url),
            Some(path) => format!("{}/{path}", self.backend_url),
            None => self.placeholder.clone(),
        }
    }
}

/// Normalizes one raw product. Never fails: bad image data degrades to the
/// placeholder and is logged.
#[must_use]
pub fn transform_product(product: RawProduct, locator: &ImageLocator) -> ProductDisplayRecord {
    let images = ProductImages::resolve(product.product_images.as_ref());
    if let ProductImages::Malformed(reason) = &images {
        tracing::warn!(
            product_id = product.id,
            %reason,
            "malformed product_images; using placeholder"
        );
    }

    ProductDisplayRecord {
        product_id: product.id,
        product_name: product.name.to_uppercase(),
        img_source: locator.image_source(&images),
        in_stock: product.quantity.is_some_and(|q| q > 0),
        rate: product.rate,
        num_rate: product.num_rate,
        original_price: product.original_price,
        sale_price: product.sale_price,
    }
}

/// Normalizes a page of raw products, preserving order.
#[must_use]
pub fn transform_products(
    products: Vec<RawProduct>,
    locator: &ImageLocator,
) -> Vec<ProductDisplayRecord> {
    products
        .into_iter()
        .map(|p| transform_product(p, locator))
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
