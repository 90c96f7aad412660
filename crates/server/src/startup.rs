use std::future::Future;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over an already-migrated database.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(AppState::new(db), build_cors())
}

/// Connect, migrate, bind and serve until `shutdown` resolves.
pub async fn run(cfg: AppConfig, shutdown: impl Future<Output = ()> + Send + 'static) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::ping(&db).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database migrations applied");

    let app = build_app(db);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting healthify server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped accepting connections");
    Ok(())
}
