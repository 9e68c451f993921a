//! Server binary: opens the pool, ensures tables, mounts routes.

use axum::Router;
use camp_registry::{api_routes, common_routes, connect, database_url, ensure_tables, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("camp_registry=info")),
        )
        .init();

    let pool = connect(&database_url()).await?;
    ensure_tables(&pool).await?;
    let state = AppState { pool };

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state));

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5555);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
