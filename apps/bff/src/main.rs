//! # BFF (Backend for Frontend) サーバー
//!
//! 社員ディレクトリサービス（Employee Service）の前段に立つ API サーバー。
//!
//! ## 役割
//!
//! - **中継**: 各リクエストを Employee Service への 1 回の呼び出しに変換する
//! - **正規化**: 揺れのある上流ペイロードを安定したローカル契約に整える
//! - **集計**: 最高給与・給与上位 10 名を社員一覧から計算する
//! - **エラー変換**: 上流のステータスを RFC 9457 形式のエラーに変換する
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   Client     │────▶│     BFF      │────▶│ Employee Service │
//! │              │     │  port: 8080  │     │   (上流 API)     │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `BFF_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `BFF_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `EMPLOYEE_SERVICE_URL` | **Yes** | Employee Service のベース URL |
//! | `EMPLOYEE_SERVICE_TIMEOUT_SECS` | No | 上流リクエストのタイムアウト秒数（デフォルト: `30`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,empdir=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! EMPLOYEE_SERVICE_URL=http://dummy.restapiexample.com/api/v1 cargo run -p empdir-bff
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use empdir_bff::{app_builder::build_app, config::BffConfig};
use empdir_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// BFF サーバーのエントリーポイント
///
/// 1. `.env` の読み込みとトレーシング初期化
/// 2. 設定の読み込み
/// 3. ルーターの構築
/// 4. HTTP サーバーの起動（Ctrl+C で graceful shutdown）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    init_tracing(&TracingConfig::from_env("bff"));
    let _tracing_guard = tracing::info_span!("app", service = "bff").entered();

    let config = BffConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        employee_service_url = %config.employee_service.base_url,
        "BFF サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let app = build_app(&config).context("HTTP クライアントの初期化に失敗しました")?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("BFF サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("BFF サーバーを停止しました");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "シャットダウンシグナルの待ち受けに失敗しました");
    }
}
