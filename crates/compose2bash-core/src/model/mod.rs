//! モデル定義
//!
//! composeファイルから読み込むデータモデルを定義します。

mod link;
mod service;

// Re-exports
pub use link::*;
pub use service::*;
