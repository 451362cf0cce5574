//! Chart-ready sales metrics for the admin dashboard.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesMetrics {
    pub total_revenue: i64,
    pub order_count: usize,
    /// One slice per order status, in first-seen order.
    pub sales_by_status: Vec<StatusSlice>,
    /// Revenue per `YYYY-MM`, ascending.
    pub sales_over_time: Vec<RevenuePoint>,
    /// Order count per `YYYY-MM`, over the same months as `sales_over_time`.
    pub orders_over_time: Vec<OrderCountPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCountPoint {
    pub month: String,
    pub count: usize,
}

/// Short human form of a large number: `1234` → `"1.2K"`, `3_400_000` → `"3.4M"`.
///
/// At most one fractional digit; a trailing `.0` is dropped.
#[must_use]
pub fn compact_number(value: i64) -> String {
    const UNITS: [(&str, f64); 4] = [("K", 1e3), ("M", 1e6), ("B", 1e9), ("T", 1e12)];

    #[allow(clippy::cast_precision_loss)]
    let v = value as f64;
    let magnitude = v.abs();

    let Some(mut idx) = UNITS.iter().rposition(|(_, scale)| magnitude >= *scale) else {
        return value.to_string();
    };
    // 999_960 rounds to 1000.0K; show it as 1M instead.
    if round_one(magnitude / UNITS[idx].1) >= 1000.0 && idx + 1 < UNITS.len() {
        idx += 1;
    }

    let (suffix, scale) = UNITS[idx];
    let text = format!("{:.1}", round_one(v / scale));
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{text}{suffix}")
}

fn round_one(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
