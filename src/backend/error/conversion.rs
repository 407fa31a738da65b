/**
 * Error Conversion
 *
 * All proxy errors implement `IntoResponse` from Axum, so handlers return
 * them directly. The response body is always an `ErrorResponse`:
 *
 * ```json
 * {
 *   "error": { "msg": "Task not found", "error_code": "TASK_NOT_FOUND" }
 * }
 * ```
 */
use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ProxyError;
use crate::shared::ErrorResponse;

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse::from(self.envelope());

        (status, Json(body)).into_response()
    }
}
