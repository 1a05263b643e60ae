#![allow(dead_code)]

use std::time::Duration;

use axum::Router;

use firewatch_api::config::ServerConfig;
use firewatch_api::router::build_app_router;
use firewatch_api::state::AppState;
use firewatch_dashboard::client::DetectClient;

/// Serve `router` on an ephemeral localhost port and return its base URL.
pub async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start the real classifier service and return its base URL.
pub async fn spawn_classifier() -> String {
    spawn_service(build_app_router(AppState::new(ServerConfig::default()))).await
}

/// A base URL on which nothing is listening.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn client(url: &str) -> DetectClient {
    DetectClient::new(url, Duration::from_secs(5)).unwrap()
}
