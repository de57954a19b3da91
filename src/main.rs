//! Product catalog server. `--migrate` applies migrations and exits.

use product_catalog::{
    app, apply_migrations, ensure_database_exists, telemetry, AppState, MemoryProductStore,
    PgProductStore, ProductStore, Settings, StoreKind,
};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let settings = Settings::from_env()?;
    let migrate_only = std::env::args().skip(1).any(|a| a == "--migrate");

    let store: Arc<dyn ProductStore> = match settings.store {
        StoreKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            apply_migrations(&pool).await?;
            Arc::new(PgProductStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(MemoryProductStore::new())
        }
    };
    if migrate_only {
        return Ok(());
    }

    let app = app(AppState::new(store), settings.body_limit);
    let listener = TcpListener::bind(settings.socket_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
