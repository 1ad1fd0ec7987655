// src/main.rs

use std::sync::Arc;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use taskboard::api::router::app_router;
use taskboard::config::CONFIG;
use taskboard::server::db;
use taskboard::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(CONFIG.log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting taskboard backend");

    let pool = db::create_pool(&CONFIG.database_url, CONFIG.sqlite_max_connections).await?;
    db::run_migrations(&pool).await?;

    let state = Arc::new(AppState::new(pool));
    let app = app_router(state);

    let bind_address = format!("{}:{}", CONFIG.host, CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
