pub mod error;

pub use error::*;

use std::ffi::OsString;
use std::path::PathBuf;

/// デフォルトのcomposeファイルパス
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// デフォルトの出力ディレクトリ
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// 単一ハイフンでも受け付けるロングフラグ（`-app` 形式）
const SINGLE_DASH_FLAGS: &[&str] = &["app", "yml", "output", "docker-host"];

/// 1回の実行で使う設定
///
/// 起動時に一度だけ組み立て、以降は参照で引き回す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// サービス名・リンク先に付与するアプリケーション名
    pub app_name: String,
    /// 読み込むcomposeファイル
    pub compose_path: PathBuf,
    /// スクリプトの出力先ディレクトリ
    pub output_dir: PathBuf,
    /// リモートDockerデーモンの接続先（ローカルの場合はNone）
    pub docker_host: Option<String>,
}

impl GenerateConfig {
    /// 設定を作成
    ///
    /// `app_name` が空の場合は [`ConfigError::MissingAppName`] を返す。
    /// `docker_host` の空文字列はローカル接続として扱う。
    pub fn new(
        app_name: impl Into<String>,
        compose_path: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        docker_host: Option<String>,
    ) -> Result<Self> {
        let app_name = app_name.into();
        if app_name.is_empty() {
            return Err(ConfigError::MissingAppName);
        }

        Ok(Self {
            app_name,
            compose_path: compose_path.into(),
            output_dir: output_dir.into(),
            docker_host: docker_host.filter(|host| !host.is_empty()),
        })
    }

    /// デフォルトのパスで設定を作成
    pub fn with_defaults(app_name: impl Into<String>) -> Result<Self> {
        Self::new(app_name, DEFAULT_COMPOSE_FILE, DEFAULT_OUTPUT_DIR, None)
    }

    /// 接続先ホスト（未設定なら空文字列）
    pub fn docker_host(&self) -> &str {
        self.docker_host.as_deref().unwrap_or("")
    }
}

/// `-app foo` / `-app=foo` 形式の引数を `--app foo` / `--app=foo` に正規化
///
/// 既存のシェルスクリプトから呼ばれる互換用。対象は [`SINGLE_DASH_FLAGS`] のみで、
/// `-v` などの短縮フラグや `--` 以降の引数はそのまま残す。
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str().map(str::to_owned) else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }

            match text.strip_prefix('-') {
                Some(body) if !body.starts_with('-') => {
                    let name = body.split_once('=').map_or(body, |(name, _)| name);
                    if SINGLE_DASH_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
