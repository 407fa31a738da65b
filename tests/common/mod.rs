//! Common test utilities and helpers
//!
//! - Sample task payloads shaped like the backend's responses
//! - Proxy construction against a mock backend
//! - A backend URL nothing listens on, for transport failures

#![allow(dead_code)]

use std::net::SocketAddr;

use axum_test::TestServer;
use serde_json::{json, Value};
use spirited_todo::backend::server::{create_app, ProxyConfig};

/// A task as the backend serializes it
pub fn task_json(id: i64, title: &str, priority: u8) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "priority": priority,
        "created_at": "2024-05-01T10:00:00Z",
        "updated_at": "2024-05-01T10:00:00Z"
    })
}

/// A page of tasks as the backend serializes it
pub fn task_page_json(items: Vec<Value>, total: u64, page: u32, page_size: u32) -> Value {
    json!({
        "items": items,
        "total": total,
        "page": page,
        "page_size": page_size
    })
}

/// Structured backend error body
pub fn backend_detail(error_code: &str, msg: &str) -> Value {
    json!({ "detail": { "error_code": error_code, "msg": msg } })
}

fn proxy_config(backend_url: &str) -> ProxyConfig {
    ProxyConfig::builder()
        .backend_url(backend_url)
        .bind_addr("127.0.0.1:0")
        .build()
        .expect("test proxy config is valid")
}

/// In-process proxy for request/response assertions
pub fn proxy_server(backend_url: &str) -> TestServer {
    TestServer::new(create_app(&proxy_config(backend_url))).expect("Failed to build test server")
}

/// Serve the proxy on a real socket and return its base URL
pub async fn spawn_proxy(backend_url: &str) -> String {
    let config = proxy_config(backend_url);
    let app = create_app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind proxy listener");
    let addr: SocketAddr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("proxy server failed");
    });

    format!("http://{}", addr)
}

/// A URL on a port that was free a moment ago and is now closed
pub fn unreachable_backend_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind a free port");
    let port = listener.local_addr().expect("listener has an address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
