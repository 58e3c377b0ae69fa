//! 統合テスト用の共通ユーティリティ
//!
//! 上流の Employee Service を 127.0.0.1 の空きポートで起動する axum モックと、
//! そのモックに向けた BFF アプリケーションを構築する。

#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use empdir_bff::{app_builder::build_app, config::BffConfig};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// 上流モックを起動し、ベース URL を返す
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// 何も待ち受けていないアドレスを返す
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// 指定したベース URL を上流とする BFF を構築する
pub fn app_for(base_url: &str) -> Router {
    let config = BffConfig::from_lookup(|name| match name {
        "EMPLOYEE_SERVICE_URL" => Some(base_url.to_string()),
        "EMPLOYEE_SERVICE_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .unwrap();

    build_app(&config).unwrap()
}

/// リクエストを送り、ステータスと JSON ボディを返す
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|_| panic!("JSON ボディであること: {}", String::from_utf8_lossy(&body)));
    (status, json)
}

/// GET リクエストを組み立てる
pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
