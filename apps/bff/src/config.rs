//! # BFF 設定
//!
//! 環境変数から BFF サーバーの設定を読み込む。
//!
//! | 変数 | 既定値 |
//! |------|--------|
//! | `BFF_HOST` | `0.0.0.0` |
//! | `BFF_PORT` | `8080` |
//! | `EMPLOYEE_SERVICE_URL` | （必須） |
//! | `EMPLOYEE_SERVICE_TIMEOUT_SECS` | `30` |

use std::{env, time::Duration};

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Employee Service への接続設定
#[derive(Debug, Clone)]
pub struct EmployeeServiceConfig {
    /// ベース URL（例: `http://dummy.restapiexample.com/api/v1`）
    pub base_url: String,
    /// 1 リクエストあたりのタイムアウト
    pub timeout:  Duration,
}

/// BFF サーバーの設定
#[derive(Debug, Clone)]
pub struct BffConfig {
    /// バインドアドレス
    pub host:             String,
    /// ポート番号
    pub port:             u16,
    pub employee_service: EmployeeServiceConfig,
}

impl BffConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセスの環境変数を書き換えずに済むよう、参照先を差し替えられる。
    /// 空文字の値は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let host = get("BFF_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("BFF_PORT") {
            Some(value) => parse_number("BFF_PORT", value)?,
            None => DEFAULT_PORT,
        };

        let base_url = get("EMPLOYEE_SERVICE_URL")
            .ok_or(ConfigError::Missing("EMPLOYEE_SERVICE_URL"))?;
        if reqwest::Url::parse(&base_url).is_err() {
            return Err(ConfigError::Invalid {
                name:  "EMPLOYEE_SERVICE_URL",
                value: base_url,
            });
        }

        let timeout_secs = match get("EMPLOYEE_SERVICE_TIMEOUT_SECS") {
            Some(value) => parse_number("EMPLOYEE_SERVICE_TIMEOUT_SECS", value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name:  "EMPLOYEE_SERVICE_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            employee_service: EmployeeServiceConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
