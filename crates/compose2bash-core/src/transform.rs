//! サービス定義 → スクリプト描画用コンテキストへの変換

use crate::model::{INSTANCE_SUFFIX, Link, Service};
use compose2bash_config::GenerateConfig;
use serde::Serialize;
use tracing::debug;

/// スクリプト1本分の描画コンテキスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderingContext {
    pub app_name: String,
    /// 空文字列、または `--host=<host>`
    pub docker_host_arg: String,
    /// `docker run --name` に渡すコンテナ名（`<service.name>_1`）
    pub container_name: String,
    /// 名前とリンクを解決済みのサービス
    pub service: Service,
}

/// Docker CLIの接続先フラグを生成
pub fn docker_host_arg(docker_host: &str) -> String {
    if docker_host.is_empty() {
        String::new()
    } else {
        format!("--host={}", docker_host)
    }
}

/// アプリ名でスコープしたサービス名（`<app>-<service>`）
pub fn scoped_service_name(app_name: &str, service_name: &str) -> String {
    format!("{}-{}", app_name, service_name)
}

/// サービス定義を描画コンテキストに解決
///
/// 入力の `service` は変更しない。同じ定義から何度呼んでも同じ結果になる。
/// ただし解決済みのサービスを再度渡すと名前・リンクが二重にスコープされる。
pub fn transform(service_name: &str, service: &Service, config: &GenerateConfig) -> RenderingContext {
    let app_name = config.app_name.as_str();

    let mut resolved = service.clone();
    resolved.name = scoped_service_name(app_name, service_name);
    resolved.links = service
        .links
        .iter()
        .map(|entry| Link::parse(entry).scoped(app_name))
        .collect();

    debug!(
        service = %service_name,
        name = %resolved.name,
        links = ?resolved.links,
        "Resolved service"
    );

    RenderingContext {
        app_name: app_name.to_string(),
        docker_host_arg: docker_host_arg(config.docker_host()),
        container_name: format!("{}{}", resolved.name, INSTANCE_SUFFIX),
        service: resolved,
    }
}
