//! User API web layer
//!
//! Publishes the user service's controller over HTTP with axum.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::WebConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server against the process-wide container.
pub async fn run_server(config: WebConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr: SocketAddr = config.bind_address().parse()?;
    let app = create_router(AppState::global(config));

    info!("User API listening on {}", addr);
    info!("Swagger UI at http://{}/swagger-ui/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
