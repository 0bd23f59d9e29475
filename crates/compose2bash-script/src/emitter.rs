//! 描画したスクリプトのファイル書き出し

use crate::error::{Result, ScriptError};
use crate::render::ScriptRenderer;
use compose2bash_config::GenerateConfig;
use compose2bash_core::{RenderingContext, Services, transform};
use std::path::{Path, PathBuf};
use tracing::info;

/// スクリプトのファイル名（`<service.name>.1.sh`）
pub fn script_file_name(ctx: &RenderingContext) -> String {
    format!("{}.1.sh", ctx.service.name)
}

/// 1サービス分のスクリプトを書き出す
///
/// 既存ファイルは上書きする。実行権限は付与しない。
pub fn emit(ctx: &RenderingContext, output_dir: &Path) -> Result<PathBuf> {
    let renderer = ScriptRenderer::new()?;
    emit_with(&renderer, ctx, output_dir)
}

/// 既存のレンダラーで1サービス分のスクリプトを書き出す
pub fn emit_with(
    renderer: &ScriptRenderer,
    ctx: &RenderingContext,
    output_dir: &Path,
) -> Result<PathBuf> {
    let script = renderer.render(ctx)?;
    let path = output_dir.join(script_file_name(ctx));

    // fs::write はファイルを開いて書き込み、戻る前に閉じる
    std::fs::write(&path, script).map_err(|source| ScriptError::Write {
        path: path.clone(),
        source,
    })?;

    info!(service = %ctx.service.name, path = %path.display(), "Wrote launch script");
    Ok(path)
}

/// 全サービスを変換してスクリプトを書き出す
///
/// サービス名の順に処理し、最初のエラーで中断する。
/// 中断前に書き出したファイルは残る。
pub fn emit_all(services: &Services, config: &GenerateConfig) -> Result<Vec<PathBuf>> {
    let renderer = ScriptRenderer::new()?;
    let mut written = Vec::with_capacity(services.len());

    for (name, service) in services {
        let ctx = transform(name, service, config);
        written.push(emit_with(&renderer, &ctx, &config.output_dir)?);
    }

    Ok(written)
}
