//! # Request ID 伝播ミドルウェア
//!
//! 受信リクエストの Request ID を Employee Service への呼び出しに引き継ぐ。
//!
//! 1. [`store_request_id`] が `SetRequestIdLayer` の付与した
//!    [`RequestId`](tower_http::request_id::RequestId) を task-local に保存する
//! 2. [`inject_request_id`] が task-local の値を reqwest の `RequestBuilder` に
//!    `X-Request-Id` として付与する
//!
//! クライアントのメソッドシグネチャに Request ID を通さずに済むよう task-local を使う。

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use empdir_shared::observability::REQUEST_ID_HEADER;
use tower_http::request_id::RequestId;

tokio::task_local! {
    static REQUEST_ID: Option<String>;
}

/// 現在のリクエストの Request ID を取得する
///
/// task-local スコープ外、または ID がヘッダー値として不正な場合は `None`。
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok().flatten()
}

/// Request ID を task-local に保存するミドルウェア
pub async fn store_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .map(str::to_string);

    REQUEST_ID.scope(request_id, next.run(request)).await
}

/// reqwest リクエストビルダーに `X-Request-Id` ヘッダーを付与する
///
/// Request ID がなければビルダーをそのまま返す。
pub fn inject_request_id(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match current_request_id() {
        Some(id) => builder.header(REQUEST_ID_HEADER, id),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_request_id_task_localスコープ外でnoneを返す() {
        assert_eq!(current_request_id(), None);
    }

    #[tokio::test]
    async fn test_current_request_id_スコープ内でidを返す() {
        let id = REQUEST_ID
            .scope(Some("abc".to_string()), async { current_request_id() })
            .await;

        assert_eq!(id.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_inject_request_id_task_local設定時にヘッダーを付与する() {
        let client = reqwest::Client::new();

        let request = REQUEST_ID
            .scope(Some("test-request-id-456".to_string()), async {
                inject_request_id(client.get("http://example.com/employees"))
                    .build()
                    .unwrap()
            })
            .await;

        let header_value = request
            .headers()
            .get("x-request-id")
            .expect("x-request-id ヘッダーが存在すること");
        assert_eq!(header_value.to_str().unwrap(), "test-request-id-456");
    }

    #[tokio::test]
    async fn test_inject_request_id_idなしのスコープではヘッダーを付与しない() {
        let client = reqwest::Client::new();

        let request = REQUEST_ID
            .scope(None, async {
                inject_request_id(client.get("http://example.com/employees"))
                    .build()
                    .unwrap()
            })
            .await;

        assert!(request.headers().get("x-request-id").is_none());
    }

    #[tokio::test]
    async fn test_inject_request_id_task_local未設定時にビルダーを変更しない() {
        let client = reqwest::Client::new();
        let request = inject_request_id(client.get("http://example.com/employees"))
            .build()
            .unwrap();

        assert!(
            request.headers().get("x-request-id").is_none(),
            "task-local 未設定時は x-request-id ヘッダーが含まれないこと"
        );
    }
}
