//! Dev smoke tool: log in, load the snapshot, print a summary.
//!
//! Usage:
//! ```bash
//! WARUNG_EMAIL=owner@example.com WARUNG_PASSWORD=secret \
//!     cargo run -p warung-store --bin report -- 7days
//! ```
//!
//! The range argument accepts `today`, `7days`, `30days`, or `all`
//! (default `all`).

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use warung_client::{ApiClient, ClientConfig, Session};
use warung_core::ReportRange;
use warung_store::DataStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let range = std::env::args()
        .nth(1)
        .as_deref()
        .and_then(ReportRange::from_key)
        .unwrap_or_default();

    let email = std::env::var("WARUNG_EMAIL")?;
    let password = std::env::var("WARUNG_PASSWORD")?;

    let config = ClientConfig::load()?;
    info!(base_url = %config.base_url, "connecting");

    let client = ApiClient::new(&config)?;
    let session = Session::new(client.clone());
    let user = session.login(&email, &password).await?;
    info!(name = %user.name, "logged in");

    let store = DataStore::new(Arc::new(client));
    store.load().await?;

    let summary = store.summary(range);
    println!("Range:          {range:?}");
    println!("Total revenue:  {:.0}", summary.total_revenue);
    println!("Total profit:   {:.0}", summary.total_profit);
    println!("Products:       {}", summary.total_products);
    println!("Sales:          {}", summary.total_sales);

    println!("\nTop products:");
    for top in &summary.top_products {
        println!("  {:>4} x {}", top.quantity, top.name);
    }

    println!("\nBy day:");
    for bucket in &summary.sales_by_day {
        println!(
            "  {}  revenue {:>10.0}  profit {:>10.0}",
            bucket.date, bucket.revenue, bucket.profit
        );
    }

    Ok(())
}
