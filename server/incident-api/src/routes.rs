//! Router assembly.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the full router: `/health` plus the `/incidents` collection and item routes.
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/health", get(handlers::health))
    .route(
      "/incidents",
      get(handlers::list_incidents).post(handlers::create_incident),
    )
    .route(
      "/incidents/:id",
      get(handlers::get_incident).delete(handlers::delete_incident),
    )
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(Arc::new(state))
}
