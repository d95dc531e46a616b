//! Print the current "order needed" alerts.
//!
//! Reads the API token from MATERIAH_TOKEN and connection settings from the
//! usual configuration sources.

use materiah_client::pagination::PaginatedFetcher;
use materiah_client::{ApiClient, Config};
use shared::models::OrderNotification;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "materiah_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let config = Config::load()?;
    let token = std::env::var("MATERIAH_TOKEN")?;
    let client = ApiClient::new(&config.api, token)?;

    let fetcher = PaginatedFetcher::new(&client);
    let alerts: Vec<OrderNotification> = fetcher.fetch_all("notifications/order/", &[]).await?;

    for alert in &alerts {
        println!(
            "{} ({}) - {} in stock, supplied by {}",
            alert.product.name, alert.product.cat_num, alert.current_stock, alert.supplier_name
        );
    }
    println!("{} products need ordering", alerts.len());

    Ok(())
}
