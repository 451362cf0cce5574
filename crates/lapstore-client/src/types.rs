//! Storefront API response types.
//!
//! ## Observed shapes
//!
//! ### `GET /laptops/filter`, `GET /laptops/search`
//! `{ "results": [...], "total_count": N }` plus echo fields (`page`, `limit`,
//! `sort`) we ignore. Either main field may be missing or `null` on
//! error-ish responses; both default.
//!
//! ### `product_images`
//! Stored as a JSON-encoded string in the database; the search index usually
//! returns it already decoded as an array. Older rows have `null`, and a few
//! have garbage text. Kept as a raw [`serde_json::Value`] here and resolved
//! once in [`crate::normalize`].
//!
//! ### Numeric product fields
//! `rate`, `num_rate`, `quantity` and the prices can be absent on products
//! that were inserted before reviews/stock tracking existed.
//!
//! ### `GET /orders/admin/list/all`
//! A bare JSON array of orders; older deployments wrapped it as
//! `{ "orders": [...] }`. `created_at` is an ISO timestamp, usually without
//! an offset.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Deserialize)]
pub struct ListingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RawProduct>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,
}

/// Reads an explicit `null` as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// String, array, null or absent. See module docs.
    #[serde(default)]
    pub product_images: Option<serde_json::Value>,

    #[serde(default)]
    pub quantity: Option<i64>,

    #[serde(default)]
    pub rate: Option<f64>,

    #[serde(default)]
    pub num_rate: Option<i64>,

    #[serde(default)]
    pub original_price: Option<i64>,

    #[serde(default)]
    pub sale_price: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderRecord {
    pub id: i64,

    /// Order total in VND. Missing totals count as zero revenue.
    #[serde(default)]
    pub total_price: Option<i64>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
}

/// Either accepted shape of the admin order list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OrdersPayload {
    Wrapped { orders: Vec<OrderRecord> },
    Bare(Vec<OrderRecord>),
}

impl OrdersPayload {
    pub(crate) fn into_orders(self) -> Vec<OrderRecord> {
        match self {
            OrdersPayload::Wrapped { orders } | OrdersPayload::Bare(orders) => orders,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub access_token: String,
}

/// FastAPI error body: `{ "detail": "..." }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_null_fields_default() {
        let listing: ListingResponse =
            serde_json::from_str(r#"{"results": null, "total_count": null}"#).unwrap();
        assert!(listing.results.is_empty());
        assert_eq!(listing.total_count, 0);
    }

    #[test]
    fn listing_missing_fields_default() {
        let listing: ListingResponse = serde_json::from_str(r#"{"page": 2}"#).unwrap();
        assert!(listing.results.is_empty());
        assert_eq!(listing.total_count, 0);
    }

    #[test]
    fn listing_rejects_wrong_type() {
        assert!(serde_json::from_str::<ListingResponse>(r#"{"total_count": "many"}"#).is_err());
    }

    #[test]
    fn product_null_name_is_empty() {
        let product: RawProduct = serde_json::from_str(r#"{"id": 4, "name": null}"#).unwrap();
        assert_eq!(product.name, "");
        assert!(product.product_images.is_none());
    }

    #[test]
    fn orders_accept_bare_and_wrapped_lists() {
        let bare: OrdersPayload = serde_json::from_str(r#"[{"id": 1}]"#).unwrap();
        let wrapped: OrdersPayload = serde_json::from_str(r#"{"orders": [{"id": 2}]}"#).unwrap();
        assert_eq!(bare.into_orders()[0].id, 1);
        assert_eq!(wrapped.into_orders()[0].id, 2);
    }
}
