//! # OpenAPI YAML 生成ツール
//!
//! BFF の Rust 型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//!
//! ```bash
//! cargo run --bin generate-openapi -p empdir-bff > openapi.yaml
//! ```

use empdir_bff::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let yaml = ApiDoc::openapi().to_yaml()?;
    print!("{yaml}");
    Ok(())
}
