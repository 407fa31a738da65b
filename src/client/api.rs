//! Task API Client
//!
//! Async functions for the five task operations exposed by the proxy.
//! Every call makes exactly one request; failures come back as
//! [`ClientError`], never as a silently accepted payload.

use reqwest::{Client, RequestBuilder, Response};

use crate::client::config::ClientConfig;
use crate::client::error::{ensure_success, ApiError, ClientError};
use crate::shared::{Task, TaskCreate, TaskListParams, TaskListResponse, TaskUpdate};

const API_TASKS_PATH: &str = "/api/tasks";

/// Task API client
#[derive(Debug, Clone)]
pub struct TaskApiClient {
    config: ClientConfig,
    client: Client,
}

impl TaskApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use an existing `reqwest::Client` (shared pool, custom settings)
    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Listing request; only parameters that are set end up in the query
    fn list_request(&self, params: &TaskListParams) -> RequestBuilder {
        self.client
            .get(self.config.api_url(API_TASKS_PATH))
            .query(params)
    }

    fn task_url(&self, id: i64) -> String {
        self.config.api_url(&format!("{API_TASKS_PATH}/{id}"))
    }

    /// List tasks
    pub async fn get_tasks(&self, params: &TaskListParams) -> Result<TaskListResponse, ClientError> {
        let response = self.list_request(params).send().await?;
        decode(ensure_success(response, "Failed to fetch tasks").await?).await
    }

    /// Fetch one task
    pub async fn get_task(&self, id: i64) -> Result<Task, ClientError> {
        let response = self.client.get(self.task_url(id)).send().await?;
        let fallback = format!("Failed to fetch task {id}");
        decode(ensure_success(response, &fallback).await?).await
    }

    /// Create a task; a blank title is rejected before any request is made
    pub async fn create_task(&self, task: &TaskCreate) -> Result<Task, ClientError> {
        task.validate().map_err(ApiError::from)?;

        let response = self
            .client
            .post(self.config.api_url(API_TASKS_PATH))
            .json(task)
            .send()
            .await?;
        decode(ensure_success(response, "Failed to create task").await?).await
    }

    /// Apply a partial update to a task
    pub async fn update_task(&self, id: i64, updates: &TaskUpdate) -> Result<Task, ClientError> {
        let response = self.client.patch(self.task_url(id)).json(updates).send().await?;
        let fallback = format!("Failed to update task {id}");
        decode(ensure_success(response, &fallback).await?).await
    }

    /// Delete a task
    pub async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        let fallback = format!("Failed to delete task {id}");
        ensure_success(response, &fallback).await?;
        Ok(())
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response.json::<T>().await.map_err(|e| {
        tracing::warn!("Failed to decode task response: {:?}", e);
        ClientError::Transport(e)
    })
}
