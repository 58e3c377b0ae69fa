//! # 外部 API クライアント
//!
//! 上流の Employee Service との通信を担当する。

pub mod employee_service;

pub use employee_service::{
    CreateEmployeeUpstreamRequest,
    DeleteEmployeeResponse,
    Employee,
    EmployeeEnvelope,
    EmployeeServiceClient,
    EmployeeServiceClientImpl,
    EmployeeServiceError,
    classify_status,
};
