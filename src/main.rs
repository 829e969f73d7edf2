//! # Flasky Web
//!
//! UI shell for the flasky order/product backend. Serves the Home, Products,
//! Orders and OrderDetail views and forwards every data operation to the
//! backend's REST API.
//!
//! ## Configuration
//!
//! - `API_BASE_URL`: backend prefix (default `http://localhost:3000/api`)
//! - `BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `RUST_LOG`: log filter

use flasky_web::config::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flasky_web=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting flasky web shell");

    let config = AppConfig::from_env()?;
    let api = config.api_client()?;
    info!("Using backend at {}", api.base_url());

    let app = flasky_web::create_app(api);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
