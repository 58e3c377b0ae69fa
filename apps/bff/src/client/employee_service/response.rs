//! Employee Service レスポンスの共通ハンドリング

use serde::de::DeserializeOwned;

use super::{
    decode::decode_body,
    error::{EmployeeServiceError, classify_status},
};

/// Employee Service レスポンスの共通ハンドリング
///
/// 非 2xx はボディを読まずに [`classify_status`] の結果で即座に失敗する。
/// 2xx はボディを寛容なデコードルールで `T` に変換する。
pub(super) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, EmployeeServiceError> {
    let status = response.status();

    if !status.is_success() {
        tracing::debug!(%status, "Employee Service がエラーステータスを返しました");
        return Err(classify_status(status.as_u16()));
    }

    let body = response.bytes().await?;
    decode_body(&body)
}
