//! # BFF エラーハンドリング
//!
//! Employee Service のエラーを RFC 9457 形式の axum レスポンスへ変換する。
//!
//! | エラー | ステータス |
//! |--------|-----------|
//! | `BadRequest` | 400 |
//! | `AuthError` | 401 |
//! | `NotFound` / `InformationNotFound` | 404 |
//! | `UpstreamServerError` / `UnknownUpstreamError` / `MalformedUpstreamData` | 502 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use empdir_shared::ErrorResponse;

use crate::client::EmployeeServiceError;

/// 502 レスポンスの detail（上流の内部情報は含めない）
const UPSTREAM_FAILURE_DETAIL: &str = "社員サービスとの通信に失敗しました";

// --- IntoResponse for EmployeeServiceError ---

impl IntoResponse for EmployeeServiceError {
    fn into_response(self) -> Response {
        match self {
            EmployeeServiceError::BadRequest => {
                bad_request_response("社員サービスがリクエストを受け付けませんでした")
            }
            EmployeeServiceError::AuthError => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized(
                    "社員サービスへのアクセスが拒否されました",
                )),
            )
                .into_response(),
            EmployeeServiceError::NotFound => not_found_response(
                "employee-not-found",
                "Employee Not Found",
                "社員が見つかりません",
            ),
            EmployeeServiceError::InformationNotFound(ref detail) => {
                not_found_response("information-not-found", "Information Not Found", detail)
            }
            EmployeeServiceError::UpstreamServerError
            | EmployeeServiceError::UnknownUpstreamError(_)
            | EmployeeServiceError::MalformedUpstreamData(_) => bad_gateway_response(),
        }
    }
}

/// Employee Service エラーをログ付きでレスポンスに変換する
///
/// 502 系のエラーはコンテキスト付きで `tracing::error!` を出力する。
/// その他のエラーは `IntoResponse` でレスポンスに変換するのみ。
pub fn log_and_convert_employee_error(context: &str, err: EmployeeServiceError) -> Response {
    if err.is_upstream_failure() {
        tracing::error!(
            error.category = "external_service",
            error.kind = error_kind(&err),
            "{}で上流エラー: {}",
            context,
            err
        );
    } else {
        tracing::debug!("{}: {}", context, err);
    }
    err.into_response()
}

fn error_kind(err: &EmployeeServiceError) -> &'static str {
    match err {
        EmployeeServiceError::MalformedUpstreamData(_) => "malformed_payload",
        EmployeeServiceError::UpstreamServerError => "upstream_server_error",
        _ => "service_communication",
    }
}

// --- レスポンスヘルパー ---

/// 400 Bad Request レスポンス
pub fn bad_request_response(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(detail)),
    )
        .into_response()
}

/// 404 Not Found レスポンス
pub fn not_found_response(error_type_suffix: &str, title: &str, detail: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(error_type_suffix, title, 404, detail)),
    )
        .into_response()
}

/// 502 Bad Gateway レスポンス
pub fn bad_gateway_response() -> Response {
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse::bad_gateway(UPSTREAM_FAILURE_DETAIL)),
    )
        .into_response()
}
