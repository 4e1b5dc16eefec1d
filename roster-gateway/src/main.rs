//! Entry point for the `roster-gateway` HTTP server.

use std::sync::Arc;

use roster_core::sample_students;
use roster_gateway::{
    config::GatewayConfig, repository::InMemoryStudentRepository, routes::create_router,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let students = match sample_students() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "seed roster failed validation");
            std::process::exit(1);
        }
    };
    let repo = InMemoryStudentRepository::new(students);
    info!(students = repo.len(), "roster loaded");

    let app = create_router(Arc::new(repo));

    let addr = config.listen_addr;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "roster-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
