//! # キャッシュ制御ミドルウェア
//!
//! 社員データは上流の状態をそのまま映すため、BFF のレスポンスはキャッシュさせない。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// 全レスポンスに `Cache-Control: no-store` を付与する
pub async fn no_store(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}
