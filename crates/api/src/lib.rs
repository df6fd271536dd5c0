//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   POST   /api/v1/clients
//!   GET    /api/v1/clients/{id}
//!   PUT    /api/v1/clients/{id}
//!   DELETE /api/v1/clients/{id}
//!   GET    /api/v1/owners/{owner_id}/clients
//!   GET    /api/v1/owners/{owner_id}/clients/cpf/{cpf}
//!
//! and the same six routes for `/suppliers`, keyed by `cnpj`.

pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use db::DbPool;

pub use error::ApiError;
pub use handlers::AppState;

/// Build the full router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/clients", post(handlers::clients::create))
        .route(
            "/api/v1/clients/:id",
            get(handlers::clients::get)
                .put(handlers::clients::update)
                .delete(handlers::clients::delete),
        )
        .route(
            "/api/v1/owners/:owner_id/clients",
            get(handlers::clients::list_by_owner),
        )
        .route(
            "/api/v1/owners/:owner_id/clients/cpf/:cpf",
            get(handlers::clients::get_by_cpf),
        )
        .route("/api/v1/suppliers", post(handlers::suppliers::create))
        .route(
            "/api/v1/suppliers/:id",
            get(handlers::suppliers::get)
                .put(handlers::suppliers::update)
                .delete(handlers::suppliers::delete),
        )
        .route(
            "/api/v1/owners/:owner_id/suppliers",
            get(handlers::suppliers::list_by_owner),
        )
        .route(
            "/api/v1/owners/:owner_id/suppliers/cnpj/:cnpj",
            get(handlers::suppliers::get_by_cnpj),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API on `bind` with Postgres-backed stores until Ctrl-C.
pub async fn serve(bind: &str, pool: DbPool) -> std::io::Result<()> {
    let app = router(AppState::postgres(pool));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
    }
    info!("shutting down API server");
}
