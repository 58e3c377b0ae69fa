//! # OpenAPI 仕様定義
//!
//! utoipa を使用して BFF の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得できる。

use utoipa::OpenApi;

use crate::handler::{employee, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Empdir API",
        version = "0.1.0",
        description = "社員ディレクトリサービスの BFF API"
    ),
    paths(
        // health
        health::health_check,
        health::readiness_check,
        // employees
        employee::list_employees,
        employee::search_employees,
        employee::get_employee,
        employee::get_highest_salary,
        employee::get_top_ten_earner_names,
        employee::create_employee,
        employee::delete_employee,
    ),
    components(schemas(
        crate::client::Employee,
        crate::client::DeleteEmployeeResponse,
        employee::CreateEmployeeRequest,
        empdir_shared::ErrorResponse,
        empdir_shared::HealthResponse,
        empdir_shared::ReadinessResponse,
    )),
    tags(
        (name = "health", description = "ヘルスチェック"),
        (name = "employees", description = "社員")
    )
)]
pub struct ApiDoc;

