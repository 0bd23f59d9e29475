//! リンク定義

use std::borrow::Cow;

/// コンテナ名に付くインスタンス番号のサフィックス
pub const INSTANCE_SUFFIX: &str = "_1";

/// `target[:alias]` 形式のリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    /// リンク先のサービス名（appプレフィックスなし）
    pub target: &'a str,
    /// コンテナ内から参照する名前
    pub alias: Option<&'a str>,
}

impl<'a> Link<'a> {
    /// リンク文字列をパース
    ///
    /// 最初の `:` でのみ分割する。2つ目以降の `:` はエイリアスの一部になる。
    pub fn parse(entry: &'a str) -> Self {
        match entry.split_once(':') {
            Some((target, alias)) => Self {
                target,
                alias: Some(alias),
            },
            None => Self {
                target: entry,
                alias: None,
            },
        }
    }

    /// エイリアス（省略時は `<target>_1`）
    pub fn alias(&self) -> Cow<'a, str> {
        match self.alias {
            Some(alias) => Cow::Borrowed(alias),
            None => Cow::Owned(format!("{}{}", self.target, INSTANCE_SUFFIX)),
        }
    }

    /// `<app>-<target>_1:<alias>` 形式に変換
    pub fn scoped(&self, app_name: &str) -> String {
        format!(
            "{}-{}{}:{}",
            app_name,
            self.target,
            INSTANCE_SUFFIX,
            self.alias()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_alias() {
        let link = Link::parse("db");
        assert_eq!(link.target, "db");
        assert_eq!(link.alias, None);
        assert_eq!(link.alias(), "db_1");
    }

    #[test]
    fn test_parse_with_alias() {
        let link = Link::parse("db:database");
        assert_eq!(link.target, "db");
        assert_eq!(link.alias, Some("database"));
        assert_eq!(link.alias(), "database");
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let link = Link::parse("db:primary:5432");
        assert_eq!(link.target, "db");
        assert_eq!(link.alias(), "primary:5432");
    }

    #[test]
    fn test_parse_empty_alias() {
        // "db:" は空のエイリアスとして扱う（デフォルトにはしない）
        let link = Link::parse("db:");
        assert_eq!(link.alias, Some(""));
        assert_eq!(link.scoped("myapp"), "myapp-db_1:");
    }

    #[test]
    fn test_scoped() {
        assert_eq!(Link::parse("db").scoped("myapp"), "myapp-db_1:db_1");
        assert_eq!(Link::parse("db:postgres").scoped("myapp"), "myapp-db_1:postgres");
        assert_eq!(Link::parse("x:y:z").scoped("app"), "app-x_1:y:z");
    }
}
