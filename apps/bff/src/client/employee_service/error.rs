//! Employee Service クライアントのエラー型と、上流ステータスの分類

use thiserror::Error;

/// Employee Service クライアントエラー
///
/// 前半 5 つは上流の HTTP ステータスから [`classify_status`] で決まる。
/// `InformationNotFound` と `MalformedUpstreamData` は BFF 側で判定する。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeServiceError {
    /// 上流が 400 を返した
    #[error("上流サービスがリクエストを拒否しました")]
    BadRequest,

    /// 上流が 401 / 403 を返した
    #[error("上流サービスで認証エラーが発生しました")]
    AuthError,

    /// 上流が 404 を返した
    #[error("上流サービスに対象のリソースが存在しません")]
    NotFound,

    /// 上流が 500 を返した
    #[error("上流サービスでサーバーエラーが発生しました")]
    UpstreamServerError,

    /// その他の非 2xx、または接続失敗・タイムアウト
    #[error("上流サービスとの通信で予期しないエラー: {0}")]
    UnknownUpstreamError(String),

    /// 上流から使えるデータが返らなかった
    #[error("データを取得できませんでした: {0}")]
    InformationNotFound(String),

    /// 上流のペイロード形状・型が想定と異なる
    #[error("上流サービスのデータ形式が不正です: {0}")]
    MalformedUpstreamData(String),
}

impl EmployeeServiceError {
    /// 上流側の障害として扱うべきエラーか（502 系）
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::UpstreamServerError | Self::UnknownUpstreamError(_) | Self::MalformedUpstreamData(_)
        )
    }
}

impl From<reqwest::Error> for EmployeeServiceError {
    fn from(err: reqwest::Error) -> Self {
        EmployeeServiceError::UnknownUpstreamError(err.to_string())
    }
}

/// 上流の非 2xx ステータスをエラー種別に分類する
///
/// 非 2xx 全域で定義される。2xx を渡した場合も `UnknownUpstreamError` になるが、
/// 呼び出し側は成功ステータスを先に除外すること。
pub fn classify_status(status: u16) -> EmployeeServiceError {
    match status {
        400 => EmployeeServiceError::BadRequest,
        401 | 403 => EmployeeServiceError::AuthError,
        404 => EmployeeServiceError::NotFound,
        500 => EmployeeServiceError::UpstreamServerError,
        other => EmployeeServiceError::UnknownUpstreamError(format!("予期しないステータス {other}")),
    }
}
