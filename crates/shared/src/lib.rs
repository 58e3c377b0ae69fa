//! # Empdir 共有ユーティリティ
//!
//! このクレートは、Empdir プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - BFF 本体（`empdir-bff`）から依存される
//! - 社員ドメインの知識を含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は feature で切り替え、最小限に抑える

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
