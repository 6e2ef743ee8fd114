//! # sym-api
//!
//! HTTP surface of the symptom checker: a liveness message, a health probe,
//! the symptom catalog, and the stub analysis endpoint.
//!
//! [`router`] returns a composable `Router`; [`serve`] binds it to an address
//! and runs until the listener fails.

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/symptoms", get(handlers::symptoms))
        .route("/analyze", post(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve the router.
///
/// # Errors
///
/// Returns `std::io::Error` if the address cannot be bound or the server fails.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "symptom checker API listening");
    axum::serve(listener, router(state)).await
}
