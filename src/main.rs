use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

mod model;
mod server;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cors = startup::cors_layer(&config)?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(cors);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {addr}, API docs served at /docs");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
