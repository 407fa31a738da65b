/**
 * Task API Routes
 *
 * # Routes
 *
 * - `GET /api/tasks` - List tasks (query forwarded verbatim)
 * - `POST /api/tasks` - Create a task
 * - `GET /api/tasks/{id}` - Fetch one task
 * - `PATCH /api/tasks/{id}` - Update one task
 * - `DELETE /api/tasks/{id}` - Delete one task (204 on success)
 */
use axum::{routing::get, Router};

use crate::backend::proxy::handlers::{create_task, delete_task, get_task, list_tasks, update_task};
use crate::backend::server::state::AppState;

/// Add the task proxy routes to a router
pub fn configure_task_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
}
