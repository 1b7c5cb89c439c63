//! CV Portfolio server
//!
//! Loads `.env`, the YAML site config, and serves the site over HTTP.

use anyhow::Result;
use tracing::info;

use cv_portfolio::utils::init_tracing;
use cv_portfolio::{run_server, AppState, SiteConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    init_tracing()?;

    let config = SiteConfig::load().await?;
    info!("Starting portfolio with default locale {}", config.default_locale);

    let state = AppState::new(config)?;
    run_server(state).await
}
