//! サービス定義

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// サービス名 → サービス定義
///
/// キー順で反復するため、出力とログの順序が実行ごとに変わらない。
pub type Services = BTreeMap<String, Service>;

/// サービス定義
///
/// YAML形式：
/// ```yaml
/// web:
///   image: nginx
///   privileged: false
///   command: nginx -g "daemon off;"
///   ports:
///     - "80:80"
///   volumes:
///     - "/data:/data"
///   links:
///     - db
///     - cache:redis
///   environment:
///     ENV: prod
/// ```
///
/// 未知のキーは無視され、省略されたキーは空値になる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    /// 解決後のサービス名（`<app>-<key>`）。ファイルからは読まない
    #[serde(skip_deserializing)]
    pub name: String,
    pub image: String,
    pub ports: Vec<String>,
    pub volumes: Vec<String>,
    /// `target[:alias]` 形式のリンク
    pub links: Vec<String>,
    pub privileged: bool,
    pub command: String,
    pub environment: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_default() {
        let service = Service::default();

        assert!(service.name.is_empty());
        assert!(service.image.is_empty());
        assert!(service.ports.is_empty());
        assert!(service.volumes.is_empty());
        assert!(service.links.is_empty());
        assert!(!service.privileged);
        assert!(service.command.is_empty());
        assert!(service.environment.is_empty());
    }

    #[test]
    fn test_name_is_not_read_from_yaml() {
        let service: Service = serde_yaml::from_str("name: bogus\nimage: redis\n").unwrap();

        assert_eq!(service.name, "");
        assert_eq!(service.image, "redis");
    }
}
