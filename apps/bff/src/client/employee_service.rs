//! # Employee Service クライアント
//!
//! BFF から上流の社員ディレクトリサービスへの通信を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /employees` - 全社員を取得
//! - `GET /employee/{id}` - 社員を取得
//! - `POST /create` - 社員を作成
//! - `DELETE /delete/{id}` - 社員を削除
//!
//! 上流のレスポンス形状の揺れは `decode` モジュールで吸収する。

mod client_impl;
mod decode;
mod employee_client;
mod error;
mod response;
mod types;

pub use client_impl::EmployeeServiceClientImpl;
pub use employee_client::EmployeeServiceClient;
pub use error::{EmployeeServiceError, classify_status};
pub use types::{
    CreateEmployeeUpstreamRequest,
    DeleteEmployeeResponse,
    Employee,
    EmployeeEnvelope,
};
