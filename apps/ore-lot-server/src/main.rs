//! Ore Lot Service HTTP server
//!
//! Wires configuration, tracing, the database connection and migrations,
//! then serves the REST API.

mod config;

use anyhow::Result;
use axum::{routing::get, Json};
use clap::Parser;
use ore_lot_service::api::rest::{routes, ApiDoc};
use ore_lot_service::domain::Service;
use ore_lot_service::infra::storage::migrations::Migrator;
use ore_lot_service::infra::storage::repositories::SeaOrmOreLotRepository;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(name = "ore-lot-server", about = "Ore Lot Service HTTP server")]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = config::load(args.config.as_deref())?;

    let db = Database::connect(&cfg.database.url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!("database ready, migrations applied");

    let repo = Arc::new(SeaOrmOreLotRepository::new(Arc::new(db)));
    let service = Arc::new(Service::new(repo));

    let app = routes::router(service)
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr).await?;
    tracing::info!(addr = %cfg.server.bind_addr, "ore lot service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = ?err, "failed to install Ctrl-C handler");
    }
    tracing::info!("shutdown signal received");
}
