//! Employee Service クライアント実装の構造体

use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;

use super::{error::EmployeeServiceError, response::handle_response};
use crate::{config::EmployeeServiceConfig, middleware::request_id::inject_request_id};

/// Employee Service クライアント実装
///
/// 1 操作につき 1 リクエストを送り、単一のレスポンスを待つ。
/// リトライ・キャッシュは行わない。
#[derive(Clone)]
pub struct EmployeeServiceClientImpl {
    pub(super) base_url: String,
    pub(super) client:   reqwest::Client,
}

impl EmployeeServiceClientImpl {
    /// 新しい EmployeeServiceClient を作成する
    ///
    /// タイムアウトは `config.timeout` をリクエスト全体に適用する。
    /// リダイレクトは追わず、3xx もそのままステータス分類に回す。
    pub fn new(config: &EmployeeServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// ベース URL にパスを連結する
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// リクエストを送信し、レスポンスを `T` にデコードする
    ///
    /// `Accept: application/json` と、あれば `X-Request-Id` を付与する。
    pub(super) async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, EmployeeServiceError> {
        let builder = builder.header(ACCEPT, HeaderValue::from_static("application/json"));
        let response = inject_request_id(builder).send().await?;
        handle_response(response).await
    }
}
