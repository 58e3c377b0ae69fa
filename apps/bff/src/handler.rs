//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、親モジュールで re-export する
//! - ハンドラは薄く保ち、集計は [`crate::projection`] に委譲する
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `employee`: 社員 API

pub mod employee;
pub mod health;

pub use employee::{
    CreateEmployeeRequest,
    EmployeeState,
    TOP_EARNER_COUNT,
    create_employee,
    delete_employee,
    get_employee,
    get_highest_salary,
    get_top_ten_earner_names,
    list_employees,
    search_employees,
};
pub use health::{ReadinessState, health_check, readiness_check};
