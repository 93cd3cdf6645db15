//! 疑似合法手の生成
//!
//! - [`movelist`]: 固定長の指し手バッファ
//! - [`generator`]: オフセットテーブルに基づく生成器

mod generator;
mod movelist;

pub use generator::{generate_all, generate_from, MoveGen};
pub use movelist::{MoveList, MAX_MOVES};
