//! Sales dashboard aggregation over the admin order list.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use lapstore_core::{Notifier, OrderCountPoint, RevenuePoint, SalesMetrics, StatusSlice};

use crate::client::StorefrontClient;
use crate::error::ClientError;
use crate::types::OrderRecord;

pub const ORDERS_FAILED_NOTICE: &str = "Failed to fetch orders data";
pub const AUTH_REQUIRED_NOTICE: &str = "Authentication required";

/// Status label for orders that carry none.
pub const UNKNOWN_STATUS: &str = "unknown";

/// Parses an order timestamp as RFC 3339, or as a naive ISO timestamp taken
/// to be UTC. Fractional seconds are optional in both forms.
#[must_use]
pub fn parse_order_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `YYYY-MM` bucket of an order timestamp.
#[must_use]
pub fn month_key(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m").to_string()
}

/// Builds dashboard metrics from the full order list.
///
/// Missing totals count as zero and missing statuses as [`UNKNOWN_STATUS`].
/// Orders whose `created_at` is absent or unparsable still count toward
/// revenue, order count and status slices but are left out of the monthly
/// series.
#[must_use]
pub fn aggregate_orders(orders: &[OrderRecord]) -> SalesMetrics {
    let mut total_revenue: i64 = 0;
    let mut sales_by_status: Vec<StatusSlice> = Vec::new();
    let mut months: BTreeMap<String, (i64, usize)> = BTreeMap::new();

    for order in orders {
        let revenue = order.total_price.unwrap_or(0);
        total_revenue = total_revenue.saturating_add(revenue);

        let status = order.status.as_deref().unwrap_or(UNKNOWN_STATUS);
        match sales_by_status.iter_mut().find(|s| s.status == status) {
            Some(slice) => slice.count += 1,
            None => sales_by_status.push(StatusSlice {
                status: status.to_owned(),
                count: 1,
            }),
        }

        let Some(ts) = order.created_at.as_deref().and_then(parse_order_timestamp) else {
            tracing::warn!(
                order_id = order.id,
                created_at = ?order.created_at,
                "order timestamp missing or unparsable; skipped from monthly series"
            );
            continue;
        };
        let bucket = months.entry(month_key(&ts)).or_insert((0, 0));
        bucket.0 = bucket.0.saturating_add(revenue);
        bucket.1 += 1;
    }

    let sales_over_time = months
        .iter()
        .map(|(month, (revenue, _))| RevenuePoint {
            month: month.clone(),
            revenue: *revenue,
        })
        .collect();
    let orders_over_time = months
        .into_iter()
        .map(|(month, (_, count))| OrderCountPoint { month, count })
        .collect();

    SalesMetrics {
        total_revenue,
        order_count: orders.len(),
        sales_by_status,
        sales_over_time,
        orders_over_time,
    }
}

/// Loads every order and aggregates it for the dashboard.
///
/// Raises one error notice on failure: [`AUTH_REQUIRED_NOTICE`] when the
/// session has no token, [`ORDERS_FAILED_NOTICE`] otherwise.
///
/// # Errors
///
/// Propagates the [`ClientError`] from
/// [`StorefrontClient::list_all_orders`].
pub async fn load_sales_metrics(
    client: &StorefrontClient,
    notifier: &dyn Notifier,
) -> Result<SalesMetrics, ClientError> {
    match client.list_all_orders().await {
        Ok(orders) => {
            let metrics = aggregate_orders(&orders);
            tracing::info!(
                orders = metrics.order_count,
                revenue = metrics.total_revenue,
                months = metrics.sales_over_time.len(),
                "dashboard metrics aggregated"
            );
            Ok(metrics)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch orders");
            if matches!(e, ClientError::NotAuthenticated) {
                notifier.error(AUTH_REQUIRED_NOTICE);
            } else {
                notifier.error(ORDERS_FAILED_NOTICE);
            }
            Err(e)
        }
    }
}
