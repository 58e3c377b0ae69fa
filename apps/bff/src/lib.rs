//! # BFF (Backend for Frontend) ライブラリ
//!
//! 社員ディレクトリサービスの前段に立つ API サーバーのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `app_builder`: 依存関係の初期化とルーター構築
//! - `client`: Employee Service クライアント
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラーレスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: ミドルウェア（Request ID 伝播、キャッシュ制御）
//! - `openapi`: OpenAPI 仕様
//! - `projection`: 社員リストの集計（最高給与、給与上位、名前検索）

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod projection;
