use std::net::SocketAddr;

use labor_rules_engine::api::{AppState, create_router};
use labor_rules_engine::config::ConfigLoader;
use labor_rules_engine::rules::RulesEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "config/california";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labor_rules_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("RULES_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let loader = ConfigLoader::load(&config_dir).inspect_err(|err| {
        tracing::error!(config_dir = %config_dir, error = %err, "Failed to load rule configuration");
    })?;
    tracing::info!(
        config_dir = %config_dir,
        jurisdiction = %loader.config().jurisdiction.name,
        "Rule configuration loaded"
    );

    let app = create_router(AppState::new(RulesEngine::new(loader.into_config())));

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    let addr = SocketAddr::new(host.parse()?, port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
