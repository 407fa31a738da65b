/**
 * Application State
 *
 * The proxy holds no mutable state between requests. `AppState` only
 * carries the forwarder, which wraps a cloneable `reqwest::Client` and the
 * backend base URL.
 *
 * The `FromRef` implementation lets handlers extract the forwarder directly:
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use spirited_todo::backend::proxy::TaskForwarder;
 *
 * async fn handler(State(forwarder): State<TaskForwarder>) {
 *     let _ = forwarder.backend_url();
 * }
 * ```
 */
use axum::extract::FromRef;

use crate::backend::proxy::TaskForwarder;

/// Application state shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relay to the backend task API
    pub forwarder: TaskForwarder,
}

impl AppState {
    pub fn new(forwarder: TaskForwarder) -> Self {
        Self { forwarder }
    }
}

impl FromRef<AppState> for TaskForwarder {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.forwarder.clone()
    }
}
