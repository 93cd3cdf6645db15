//! 局面の表現と操作
//!
//! - [`pos`]: 盤面・手番・指し手の適用と巻き戻し・利き判定
//! - [`state`]: 1手ごとに積まれる付随状態（StateInfo）
//! - [`fen`]: FENの読み書き
//! - [`display`]: テキスト表示

mod display;
mod fen;
mod pos;
mod state;

pub use fen::{FenError, START_FEN};
pub use pos::Position;
pub use state::StateInfo;
