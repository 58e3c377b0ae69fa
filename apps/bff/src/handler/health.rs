//! # ヘルスチェックハンドラ
//!
//! BFF の稼働状態を確認するためのエンドポイント。
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（Employee Service に到達できるかを確認）
//!
//! レスポンス型は [`empdir_shared::HealthResponse`] / [`empdir_shared::ReadinessResponse`] を参照。

use std::{collections::BTreeMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use empdir_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// 依存サービスのチェックに使うタイムアウト
const CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// BFF のヘルスチェックエンドポイント
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "サーバー稼働中", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub employee_service_url: String,
    pub http_client:          reqwest::Client,
}

/// BFF の Readiness Check エンドポイント
///
/// Employee Service のベース URL に GET を送り、HTTP 応答が返れば到達可能とみなす。
/// OK → 200、失敗 → 503。
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "依存サービス稼働中", body = ReadinessResponse),
        (status = 503, description = "依存サービスが利用不可", body = ReadinessResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let employee_service =
        check_employee_service(&state.http_client, &state.employee_service_url).await;

    let mut checks = BTreeMap::new();
    checks.insert("employee_service".to_string(), employee_service);

    let response = ReadinessResponse::from_checks(checks);
    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

/// Employee Service への到達性を確認する（タイムアウト: 5 秒）
///
/// ステータスコードは問わない。接続できれば OK。
async fn check_employee_service(client: &reqwest::Client, base_url: &str) -> CheckStatus {
    match tokio::time::timeout(CHECK_TIMEOUT, client.get(base_url).send()).await {
        Ok(Ok(_)) => CheckStatus::Ok,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: employee service request failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: employee service check timed out");
            CheckStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[tokio::test]
    async fn test_health_checkがhealthyとバージョンを返す() {
        let Json(body) = health_check().await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_readiness_check_接続できなければ503() {
        // ポート 1 には通常何も待ち受けていない
        let state = Arc::new(ReadinessState {
            employee_service_url: "http://127.0.0.1:1".to_string(),
            http_client:          reqwest::Client::new(),
        });

        let response = readiness_check(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "not_ready");
        assert_eq!(json["checks"]["employee_service"], "error");
    }
}
