use anyhow::Context;
use compose2bash_config::GenerateConfig;
use compose2bash_core::load_compose_file;
use compose2bash_script::emit_all;
use std::path::PathBuf;
use tracing::info;

/// composeファイルを読み込み、全サービスのスクリプトを書き出す
///
/// デコードに失敗した場合はファイルを1つも書かない。
/// 書き出し中のエラーではそこで中断し、書き出し済みのファイルは残す。
pub fn handle(config: &GenerateConfig) -> anyhow::Result<Vec<PathBuf>> {
    let services = load_compose_file(&config.compose_path)
        .with_context(|| format!("error parsing {}", config.compose_path.display()))?;

    info!(
        app = %config.app_name,
        services = services.len(),
        output = %config.output_dir.display(),
        "Generating launch scripts"
    );

    let written = emit_all(&services, config).context("error saving bash template")?;

    Ok(written)
}
