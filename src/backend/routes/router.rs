/**
 * Router Configuration
 *
 * This module combines all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Task API routes (`/api/tasks`, `/api/tasks/{id}`)
 * 2. Fallback handlers (error envelope with 404, or 405 for a known path
 *    hit with the wrong method)
 *
 * Every request passes through `TraceLayer`, which logs method, path,
 * status and latency at the levels `RUST_LOG` allows.
 */
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::proxy::handlers::{method_not_allowed, not_found};
use crate::backend::routes::api_routes::configure_task_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_task_routes(Router::new());

    // Unknown routes still answer with an error envelope
    let router = router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed);

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
