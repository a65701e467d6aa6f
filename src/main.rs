use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookmarks_server::{
    app::app,
    config::Config,
    error,
    services::{BookmarkService, Database},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "bookmarks_server=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bookmarks-server...");

    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    error::set_production(config.is_production());

    let db = match Database::new(&config).await {
        Ok(db) => {
            db.verify_connection().await?;
            info!("Database connection established successfully");
            Arc::new(db)
        }
        Err(e) => {
            error!("Failed to create database connection: {}", e);
            return Err(anyhow::anyhow!("Database initialization failed"));
        }
    };

    db.run_migrations().await?;

    let bookmark_service = BookmarkService::new(db.clone()).await?;

    let app_state = Arc::new(AppState {
        config: config.clone(),
        db: (*db).clone(),
        bookmark_service,
    });

    let addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server on http://{}", addr);

    axum::Server::bind(&addr.parse()?)
        .serve(app(app_state).into_make_service())
        .await?;

    Ok(())
}
