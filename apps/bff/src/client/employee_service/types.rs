//! Employee Service のリクエスト・レスポンス型

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{decode, error::EmployeeServiceError};

/// 社員レコード
///
/// 上流のフィールド名をそのままローカル契約にも使う。
/// `employee_salary` / `employee_age` は上流では文字列で送られてくるため
/// 文字列のまま保持し、数値が必要な箇所で [`Employee::salary_value`] 等を使う。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    #[serde(
        default,
        deserialize_with = "decode::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(
        rename = "employee_name",
        default,
        deserialize_with = "decode::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,

    #[serde(
        rename = "employee_salary",
        default,
        deserialize_with = "decode::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "320800")]
    pub salary: Option<String>,

    #[serde(
        rename = "employee_age",
        default,
        deserialize_with = "decode::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(example = "61")]
    pub age: Option<String>,

    #[serde(
        default,
        deserialize_with = "decode::lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

impl Employee {
    /// 給与を整数として取得する
    pub fn salary_value(&self) -> Result<u64, EmployeeServiceError> {
        decode::parse_non_negative("employee_salary", self.salary.as_deref())
    }
}

/// 上流のレスポンスエンベロープ
///
/// `{ "status": ..., "message": ..., "data": ... }` 形式。
/// `data` は単一オブジェクト・配列・欠落のいずれでも社員リストに正規化される。
/// `status` は上流が返した文字列を空文字も含めてそのまま保持する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmployeeEnvelope {
    #[serde(default, deserialize_with = "decode::string_or_number")]
    pub status:  Option<String>,
    #[serde(default, deserialize_with = "decode::lenient_string")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "decode::one_or_many")]
    pub data:    Vec<Employee>,
}

/// 社員作成リクエスト（上流の `POST /create` 用）
///
/// 上流は全フィールドを文字列で受け取る。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateEmployeeUpstreamRequest {
    pub name:   String,
    pub salary: String,
    pub age:    String,
}

/// 社員削除の結果（OpenAPI スキーマ用）
///
/// 実際のレスポンスは上流の応答オブジェクトから `data` を取り除いた残りで、
/// ここに挙げていないキーもそのまま返す。
#[derive(Debug, ToSchema)]
pub struct DeleteEmployeeResponse {
    #[schema(example = "success")]
    pub status:  Option<String>,
    #[schema(example = "Successfully! Record has been deleted")]
    pub message: Option<String>,
}
