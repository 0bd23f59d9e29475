//! composeファイルのローダー

use crate::error::{CoreError, Result};
use crate::model::Services;
use std::path::Path;
use tracing::{debug, info, instrument};

/// composeファイルを読み込んでサービス定義を返す
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_compose_file(path: &Path) -> Result<Services> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let services = parse_compose_str(&content)?;
    info!(services = services.len(), "Compose file loaded");

    Ok(services)
}

/// YAML文字列をパースしてサービス定義を返す
///
/// 空のドキュメントや `null` はサービス0件として扱う。
pub fn parse_compose_str(content: &str) -> Result<Services> {
    if content.trim().is_empty() {
        return Ok(Services::new());
    }

    let services: Option<Services> = serde_yaml::from_str(content)?;
    let services = services.unwrap_or_default();

    for (name, service) in &services {
        debug!(
            service = %name,
            image = %service.image,
            links = service.links.len(),
            "Decoded service"
        );
    }

    Ok(services)
}
