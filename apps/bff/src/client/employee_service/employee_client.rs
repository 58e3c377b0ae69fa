//! 社員関連の Employee Service クライアント

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{
    client_impl::EmployeeServiceClientImpl,
    decode::without_data,
    error::EmployeeServiceError,
    types::{CreateEmployeeUpstreamRequest, Employee, EmployeeEnvelope},
};

/// Employee Service クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait EmployeeServiceClient: Send + Sync {
    /// 全社員を取得する
    ///
    /// Employee Service の `GET /employees` を呼び出す。
    /// エンベロープの `data` が空の場合は空リストを返す。
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeServiceError>;

    /// ID で社員を取得する
    ///
    /// Employee Service の `GET /employee/{id}` を呼び出す。
    /// `data` が空の場合は `InformationNotFound`。
    async fn get_employee(&self, id: &str) -> Result<Employee, EmployeeServiceError>;

    /// 社員を作成する
    ///
    /// Employee Service の `POST /create` を呼び出し、上流が報告したステータス文字列を返す。
    async fn create_employee(
        &self,
        req: &CreateEmployeeUpstreamRequest,
    ) -> Result<String, EmployeeServiceError>;

    /// 社員を削除する
    ///
    /// Employee Service の `DELETE /delete/{id}` を呼び出し、
    /// 応答オブジェクトから `data` を取り除いた残りを返す。
    /// 応答がオブジェクトでなければ `MalformedUpstreamData`。
    async fn delete_employee(&self, id: &str) -> Result<Map<String, Value>, EmployeeServiceError>;
}

#[async_trait]
impl EmployeeServiceClient for EmployeeServiceClientImpl {
    async fn list_employees(&self) -> Result<Vec<Employee>, EmployeeServiceError> {
        let url = self.url("/employees");
        tracing::debug!(%url, "社員一覧を取得します");

        let envelope: EmployeeEnvelope = self.send(self.client.get(&url)).await?;
        Ok(envelope.data)
    }

    async fn get_employee(&self, id: &str) -> Result<Employee, EmployeeServiceError> {
        let url = self.url(&format!("/employee/{}", urlencoding::encode(id)));
        tracing::debug!(%url, "社員を取得します");

        let envelope: EmployeeEnvelope = self.send(self.client.get(&url)).await?;
        envelope.data.into_iter().next().ok_or_else(|| {
            EmployeeServiceError::InformationNotFound(format!("社員 {id} の情報がありません"))
        })
    }

    async fn create_employee(
        &self,
        req: &CreateEmployeeUpstreamRequest,
    ) -> Result<String, EmployeeServiceError> {
        let url = self.url("/create");
        tracing::debug!(%url, "社員を作成します");

        let envelope: EmployeeEnvelope = self.send(self.client.post(&url).json(req)).await?;
        envelope.status.ok_or_else(|| {
            EmployeeServiceError::InformationNotFound(
                "作成結果のステータスが返されませんでした".to_string(),
            )
        })
    }

    async fn delete_employee(&self, id: &str) -> Result<Map<String, Value>, EmployeeServiceError> {
        let url = self.url(&format!("/delete/{}", urlencoding::encode(id)));
        tracing::debug!(%url, "社員を削除します");

        let body: Map<String, Value> = self.send(self.client.delete(&url)).await?;
        Ok(without_data(body))
    }
}
