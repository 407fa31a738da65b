//! Task Proxy HTTP Handlers
//!
//! One handler per inbound route. Each handler extracts what the backend
//! call needs, delegates to [`TaskForwarder`], and lets [`ProxyError`]
//! render any failure as an error envelope. Extractor rejections are taken
//! as `Result`s so they too end up as envelopes.

use axum::{
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, RawQuery, State,
    },
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::backend::error::ProxyError;
use crate::backend::proxy::forwarder::TaskForwarder;

/// A backend JSON body relayed without re-encoding
pub struct RelayedJson(pub Bytes);

impl IntoResponse for RelayedJson {
    fn into_response(self) -> Response {
        ([(CONTENT_TYPE, "application/json")], self.0).into_response()
    }
}

/// Pull the numeric task id out of the path, or reject with `INVALID_INPUT`
fn task_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ProxyError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::warn!("Rejected task id: {}", rejection.body_text());
        ProxyError::InvalidId(rejection.body_text())
    })
}

/// Buffer the inbound body, keeping the extractor's status on failure
fn request_body(body: Result<Bytes, BytesRejection>) -> Result<Bytes, ProxyError> {
    body.map_err(|rejection| {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        ProxyError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    })
}

/// `GET /api/tasks`
pub async fn list_tasks(
    State(forwarder): State<TaskForwarder>,
    RawQuery(query): RawQuery,
) -> Result<RelayedJson, ProxyError> {
    forwarder.list(query.as_deref()).await.map(RelayedJson)
}

/// `POST /api/tasks`
pub async fn create_task(
    State(forwarder): State<TaskForwarder>,
    body: Result<Bytes, BytesRejection>,
) -> Result<RelayedJson, ProxyError> {
    let body = request_body(body)?;
    forwarder.create(body).await.map(RelayedJson)
}

/// `GET /api/tasks/{id}`
pub async fn get_task(
    State(forwarder): State<TaskForwarder>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<RelayedJson, ProxyError> {
    let id = task_id(path)?;
    forwarder.get(id).await.map(RelayedJson)
}

/// `PATCH /api/tasks/{id}`
pub async fn update_task(
    State(forwarder): State<TaskForwarder>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<RelayedJson, ProxyError> {
    let id = task_id(path)?;
    let body = request_body(body)?;
    forwarder.update(id, body).await.map(RelayedJson)
}

/// `DELETE /api/tasks/{id}`
pub async fn delete_task(
    State(forwarder): State<TaskForwarder>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ProxyError> {
    let id = task_id(path)?;
    forwarder.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown routes
pub async fn not_found() -> ProxyError {
    ProxyError::NotFound
}

/// Fallback for a known path with an unsupported method
pub async fn method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}
