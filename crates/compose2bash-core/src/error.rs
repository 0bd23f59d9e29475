use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("failed to read {path}: {message}")]
    IoError { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
