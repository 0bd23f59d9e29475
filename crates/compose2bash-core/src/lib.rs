//! compose2bash のコア
//!
//! composeファイルのデコードと、サービス定義をスクリプト描画用の
//! コンテキストに解決する変換ロジックを提供します。

pub mod error;
pub mod loader;
pub mod model;
pub mod transform;

pub use error::*;
pub use loader::*;
pub use model::*;
pub use transform::*;
