//! `lapstore dashboard`: admin sales metrics.

use clap::Args;
use lapstore_core::{compact_number, format_price, AppConfig, TracingNotifier};

#[derive(Debug, Args)]
pub(crate) struct DashboardArgs {
    /// Admin account email
    #[arg(long, env = "LAPSTORE_ADMIN_EMAIL")]
    pub email: String,

    /// Admin account password
    #[arg(long, env = "LAPSTORE_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Print metrics as JSON
    #[arg(long)]
    pub json: bool,
}

/// Logs in, loads every order and prints the aggregated metrics.
///
/// # Errors
///
/// Returns an error if login fails, the account is not an admin, or the
/// order list cannot be fetched.
pub(crate) async fn run_dashboard(config: &AppConfig, args: &DashboardArgs) -> anyhow::Result<()> {
    let client = crate::build_client(config)?;
    let profile = client
        .login(&args.email, &args.password)
        .await
        .map_err(|e| anyhow::anyhow!("login failed: {e}"))?;
    if !profile.is_admin() {
        client.logout();
        anyhow::bail!("account {} is not an admin", profile.email);
    }

    let metrics = lapstore_client::load_sales_metrics(&client, &TracingNotifier).await?;
    client.logout();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!(
        "Total revenue: {} ({} VND)",
        compact_number(metrics.total_revenue),
        format_price(metrics.total_revenue)
    );
    println!("Orders:        {}", metrics.order_count);
    println!();
    println!("By status:");
    for slice in &metrics.sales_by_status {
        println!("  {:<12} {}", slice.status, slice.count);
    }
    println!();
    println!("By month:");
    for (revenue, orders) in metrics.sales_over_time.iter().zip(&metrics.orders_over_time) {
        println!(
            "  {}  {:>8}  {:>4} orders",
            revenue.month,
            compact_number(revenue.revenue),
            orders.count
        );
    }
    Ok(())
}
