//! HTTP server for the wage engine.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wage_engine::api::{AppState, create_router};
use wage_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/kr_lsa";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("WAGE_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("WAGE_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        policy = %config.metadata().code,
        version = %config.metadata().version,
        minimum_wage_tables = config.config().minimum_wages().len(),
        "Loaded wage policy"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Wage engine listening");

    axum::serve(listener, app).await?;
    Ok(())
}
