//! # 社員 API ハンドラ
//!
//! Employee Service への呼び出しを中継し、ローカル契約の形に整えて返す。
//!
//! ## エンドポイント
//!
//! - `GET /employees` - 全社員
//! - `GET /search/{term}` - 名前の部分一致検索
//! - `GET /employee/{id}` - ID 指定で 1 件
//! - `GET /employee/highestSalary` - 最高給与
//! - `GET /employee/topTenHighestEarningEmployeeNames` - 給与上位 10 名の名前
//! - `POST /employee` - 社員作成
//! - `DELETE /delete/{id}` - 社員削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use empdir_shared::ErrorResponse;
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    client::{CreateEmployeeUpstreamRequest, DeleteEmployeeResponse, Employee, EmployeeServiceClient},
    error::{bad_request_response, log_and_convert_employee_error},
    projection,
};

/// 給与上位として返す人数
pub const TOP_EARNER_COUNT: usize = 10;

/// 社員 API の共有状態
pub struct EmployeeState {
    pub employee_service_client: Arc<dyn EmployeeServiceClient>,
}

// --- リクエスト型 ---

/// 社員作成リクエスト
///
/// 各フィールドは文字列・数値のどちらでも受け付ける。
/// 欠落または `null` のフィールドは文字列 `"null"` として上流に送られる。
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    #[schema(value_type = Option<String>, example = "Bilbo Baggins")]
    pub name:   Option<Value>,
    #[schema(value_type = Option<String>, example = "45")]
    pub age:    Option<Value>,
    #[schema(value_type = Option<String>, example = "5000")]
    pub salary: Option<Value>,
}

impl CreateEmployeeRequest {
    fn into_upstream(self) -> CreateEmployeeUpstreamRequest {
        CreateEmployeeUpstreamRequest {
            name:   forwarded_value(self.name),
            salary: forwarded_value(self.salary),
            age:    forwarded_value(self.age),
        }
    }
}

/// 入力値を上流に送る文字列に変換する
fn forwarded_value(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    }
}

// --- ハンドラ ---

/// GET /employees
///
/// 全社員を取得する。上流にレコードがなければ空配列。
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "社員一覧", body = Vec<Employee>),
        (status = 404, description = "上流にリソースがない / データなし", body = ErrorResponse),
        (status = 502, description = "上流サービスの障害", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<Arc<EmployeeState>>,
) -> Result<Response, Response> {
    let employees = state
        .employee_service_client
        .list_employees()
        .await
        .map_err(|e| log_and_convert_employee_error("社員一覧取得", e))?;

    Ok((StatusCode::OK, Json(employees)).into_response())
}

/// GET /search/{term}
///
/// 名前に `term` を含む社員を返す（大文字小文字は区別しない）。
#[utoipa::path(
    get,
    path = "/search/{term}",
    tag = "employees",
    params(("term" = String, Path, description = "名前の検索語")),
    responses(
        (status = 200, description = "一致した社員", body = Vec<Employee>),
        (status = 404, description = "上流にリソースがない / データなし", body = ErrorResponse),
        (status = 502, description = "上流サービスの障害", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%term))]
pub async fn search_employees(
    State(state): State<Arc<EmployeeState>>,
    Path(term): Path<String>,
) -> Result<Response, Response> {
    let employees = state
        .employee_service_client
        .list_employees()
        .await
        .map_err(|e| log_and_convert_employee_error("社員検索", e))?;

    let matched = projection::search_by_name(&employees, &term);
    Ok((StatusCode::OK, Json(matched)).into_response())
}

/// GET /employee/{id}
///
/// ID を指定して社員を 1 件取得する。
#[utoipa::path(
    get,
    path = "/employee/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "社員 ID")),
    responses(
        (status = 200, description = "社員", body = Employee),
        (status = 404, description = "社員が見つからない / データなし", body = ErrorResponse),
        (status = 502, description = "上流サービスの障害", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<Response, Response> {
    let employee = state
        .employee_service_client
        .get_employee(&id)
        .await
        .map_err(|e| log_and_convert_employee_error("社員取得", e))?;

    Ok((StatusCode::OK, Json(employee)).into_response())
}

/// GET /employee/highestSalary
///
/// 全社員の最高給与を整数で返す。
#[utoipa::path(
    get,
    path = "/employee/highestSalary",
    tag = "employees",
    responses(
        (status = 200, description = "最高給与", body = u64),
        (status = 404, description = "社員がいない", body = ErrorResponse),
        (status = 502, description = "上流サービスの障害 / 給与が数値でない", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_highest_salary(
    State(state): State<Arc<EmployeeState>>,
) -> Result<Response, Response> {
    let employees = state
        .employee_service_client
        .list_employees()
        .await
        .map_err(|e| log_and_convert_employee_error("最高給与取得", e))?;

    let salary = projection::highest_salary(&employees)
        .map_err(|e| log_and_convert_employee_error("最高給与計算", e))?;

    Ok((StatusCode::OK, Json(salary)).into_response())
}

/// GET /employee/topTenHighestEarningEmployeeNames
///
/// 給与の高い順に最大 10 名の名前を返す。
#[utoipa::path(
    get,
    path = "/employee/topTenHighestEarningEmployeeNames",
    tag = "employees",
    responses(
        (status = 200, description = "給与上位の社員名", body = Vec<String>),
        (status = 404, description = "上流にリソースがない / データなし", body = ErrorResponse),
        (status = 502, description = "上流サービスの障害 / 給与が数値でない", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_top_ten_earner_names(
    State(state): State<Arc<EmployeeState>>,
) -> Result<Response, Response> {
    let employees = state
        .employee_service_client
        .list_employees()
        .await
        .map_err(|e| log_and_convert_employee_error("給与上位取得", e))?;

    let names = projection::top_earner_names(&employees, TOP_EARNER_COUNT)
        .map_err(|e| log_and_convert_employee_error("給与上位計算", e))?;

    Ok((StatusCode::OK, Json(names)).into_response())
}

/// POST /employee
///
/// 社員を作成し、上流が報告したステータス文字列を返す。
#[utoipa::path(
    post,
    path = "/employee",
    tag = "employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 200, description = "上流のステータス", body = String),
        (status = 400, description = "リクエストが不正", body = ErrorResponse),
        (status = 404, description = "上流がステータスを返さない", body = ErrorResponse),
        (status = 502, description = "上流サービスの障害", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_employee(
    State(state): State<Arc<EmployeeState>>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<Response, Response> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "社員作成リクエストを解釈できません");
        bad_request_response(&rejection.body_text())
    })?;

    let status = state
        .employee_service_client
        .create_employee(&req.into_upstream())
        .await
        .map_err(|e| log_and_convert_employee_error("社員作成", e))?;

    Ok((StatusCode::OK, Json(status)).into_response())
}

/// DELETE /delete/{id}
///
/// 社員を削除し、上流の応答から `data` を除いた残りのキーを上流の順序のまま返す。
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "employees",
    params(("id" = String, Path, description = "社員 ID")),
    responses(
        (status = 200, description = "削除結果", body = DeleteEmployeeResponse),
        (status = 404, description = "社員が見つからない / データなし", body = ErrorResponse),
        (status = 502, description = "上流サービスの障害", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    Path(id): Path<String>,
) -> Result<Response, Response> {
    let result = state
        .employee_service_client
        .delete_employee(&id)
        .await
        .map_err(|e| log_and_convert_employee_error("社員削除", e))?;

    Ok((StatusCode::OK, Json(result)).into_response())
}
