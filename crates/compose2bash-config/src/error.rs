use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `--app` が未指定、または空文字列
    #[error("Missing app argument")]
    MissingAppName,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
