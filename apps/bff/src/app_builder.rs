//! # BFF アプリケーション構築
//!
//! DI（クライアント・State）の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post},
};
use empdir_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    client::EmployeeServiceClientImpl,
    config::BffConfig,
    handler::{
        EmployeeState,
        ReadinessState,
        create_employee,
        delete_employee,
        get_employee,
        get_highest_salary,
        get_top_ten_earner_names,
        health_check,
        list_employees,
        readiness_check,
        search_employees,
    },
    middleware::{no_store, store_request_id},
};

/// 設定から依存関係を初期化し、ルーターを構築する
pub fn build_app(config: &BffConfig) -> Result<Router, reqwest::Error> {
    let employee_service_client = Arc::new(EmployeeServiceClientImpl::new(&config.employee_service)?);

    let employee_state = Arc::new(EmployeeState {
        employee_service_client,
    });
    let readiness_state = Arc::new(ReadinessState {
        employee_service_url: config.employee_service.base_url.clone(),
        http_client:          reqwest::Client::new(),
    });

    Ok(build_router(employee_state, readiness_state))
}

/// State を受け取ってルーターを構築する
///
/// テストではスタブクライアントを持つ State を渡す。
pub fn build_router(
    employee_state: Arc<EmployeeState>,
    readiness_state: Arc<ReadinessState>,
) -> Router {
    // `/employee/highestSalary` 等の静的セグメントは `/employee/{id}` より優先される
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/employees", get(list_employees))
                .route("/search/{term}", get(search_employees))
                .route("/employee", post(create_employee))
                .route("/employee/highestSalary", get(get_highest_salary))
                .route(
                    "/employee/topTenHighestEarningEmployeeNames",
                    get(get_top_ten_earner_names),
                )
                .route("/employee/{id}", get(get_employee))
                .route("/delete/{id}", delete(delete_employee))
                .with_state(employee_state),
        )
        .layer(from_fn(no_store))
        // レイヤー順序（下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: リクエストスパンに request_id を含める
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        // 4. store_request_id: task-local に保存し、Employee Service への呼び出しに伝播する
        .layer(from_fn(store_request_id))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
