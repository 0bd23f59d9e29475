//! 起動スクリプトの描画と書き出し

pub mod emitter;
pub mod error;
pub mod render;

pub use emitter::*;
pub use error::*;
pub use render::*;
