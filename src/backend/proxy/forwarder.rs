/**
 * Proxy Forwarder
 *
 * This module translates each inbound task operation into exactly one call
 * against the backend task API and relays the outcome.
 *
 * # Outcomes
 *
 * - **Backend success**: the body is checked to be JSON and handed back
 *   byte for byte (delete has no body)
 * - **Backend non-success**: the body is normalized with the operation's
 *   fallback message and returned as `ProxyError::Upstream`, keeping the
 *   backend's status code
 * - **Transport failure**: connect errors and unreadable bodies become
 *   `ProxyError::Transport`; a non-JSON success body becomes
 *   `ProxyError::MalformedResponse`. Both render as 500.
 *
 * Nothing is retried and no timeout is set beyond the `reqwest` defaults.
 */
use bytes::Bytes;
use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, Response};
use serde::de::IgnoredAny;

use crate::backend::error::ProxyError;
use crate::backend::proxy::normalize::normalize_backend_error;

/// The five task operations the proxy exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOperation {
    List,
    Create,
    Get,
    Update,
    Delete,
}

impl TaskOperation {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Create => "create",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Message used when the backend gives no usable error detail
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::List => "Failed to fetch tasks",
            Self::Create => "Failed to create task",
            Self::Get => "Failed to fetch task",
            Self::Update => "Failed to update task",
            Self::Delete => "Failed to delete task",
        }
    }
}

/// Stateless relay to the backend task API
///
/// Cloning is cheap: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct TaskForwarder {
    client: Client,
    backend_url: String,
}

impl TaskForwarder {
    /// Create a forwarder for a backend base URL without a trailing slash
    pub fn new(client: Client, backend_url: impl Into<String>) -> Self {
        Self {
            client,
            backend_url: backend_url.into(),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.backend_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/tasks/{}", self.backend_url, id)
    }

    /// `GET /tasks?<query>`, the query string forwarded verbatim
    pub async fn list(&self, query: Option<&str>) -> Result<Bytes, ProxyError> {
        let url = match query {
            Some(query) if !query.is_empty() => format!("{}?{}", self.collection_url(), query),
            _ => self.collection_url(),
        };
        let response = self.send(TaskOperation::List, self.client.get(&url), &url).await?;
        read_json(TaskOperation::List, response).await
    }

    /// `POST /tasks` with the inbound body
    pub async fn create(&self, body: Bytes) -> Result<Bytes, ProxyError> {
        let url = self.collection_url();
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.send(TaskOperation::Create, request, &url).await?;
        read_json(TaskOperation::Create, response).await
    }

    /// `GET /tasks/{id}`
    pub async fn get(&self, id: i64) -> Result<Bytes, ProxyError> {
        let url = self.item_url(id);
        let response = self.send(TaskOperation::Get, self.client.get(&url), &url).await?;
        read_json(TaskOperation::Get, response).await
    }

    /// `PATCH /tasks/{id}` with the inbound body
    pub async fn update(&self, id: i64, body: Bytes) -> Result<Bytes, ProxyError> {
        let url = self.item_url(id);
        let request = self
            .client
            .patch(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.send(TaskOperation::Update, request, &url).await?;
        read_json(TaskOperation::Update, response).await
    }

    /// `DELETE /tasks/{id}`; the success body is discarded
    pub async fn delete(&self, id: i64) -> Result<(), ProxyError> {
        let url = self.item_url(id);
        self.send(TaskOperation::Delete, self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn send(
        &self,
        operation: TaskOperation,
        request: RequestBuilder,
        url: &str,
    ) -> Result<Response, ProxyError> {
        tracing::debug!("Forwarding {} to {}", operation.name(), url);

        let response = request.send().await.map_err(|e| {
            tracing::error!("Transport failure during {}: {:?}", operation.name(), e);
            ProxyError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // An unreadable error body is treated like an unparseable one.
        let body = response.bytes().await.unwrap_or_default();
        let envelope = normalize_backend_error(&body, operation.fallback_message());
        tracing::warn!(
            "Backend rejected {} with {}: {} ({})",
            operation.name(),
            status,
            envelope.msg,
            envelope.error_code
        );
        Err(ProxyError::upstream(status, envelope))
    }
}

async fn read_json(operation: TaskOperation, response: Response) -> Result<Bytes, ProxyError> {
    let body = response.bytes().await.map_err(|e| {
        tracing::error!("Failed to read backend response during {}: {:?}", operation.name(), e);
        ProxyError::Transport(e)
    })?;

    // Validated only; the original bytes are relayed.
    serde_json::from_slice::<IgnoredAny>(&body).map_err(|e| {
        tracing::error!("Malformed backend response during {}: {:?}", operation.name(), e);
        ProxyError::MalformedResponse(e)
    })?;
    Ok(body)
}
