//! # rchess-core
//!
//! 10x12メールボックス方式のチェス局面コアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Move, CastlingRights, etc.）
//! - `tables`: 駒の移動ジオメトリテーブル
//! - `position`: 局面表現とmake_move/unmake_move、FEN入出力
//! - `movegen`: 疑似合法手生成
//!
//! 指し手生成は疑似合法（自殺手を除外しない）で、合法性は
//! [`Position::make_move`] が適用時に判定する。falseが返った場合は
//! [`Position::unmake_move`] で巻き戻すのが呼び出し側の契約。
//!
//! ```
//! use rchess_core::{generate_all, Position};
//!
//! let mut pos = Position::startpos();
//! let moves = generate_all(&pos);
//! assert_eq!(moves.len(), 20);
//!
//! let m = moves.at(0);
//! if pos.make_move(m) {
//!     // 合法手として適用された
//! }
//! pos.unmake_move(m);
//! ```

pub mod movegen;
pub mod position;
pub mod tables;
pub mod types;

pub use movegen::{generate_all, generate_from, MoveGen, MoveList, MAX_MOVES};
pub use position::{FenError, Position, StateInfo, START_FEN};
pub use types::{CastlingRights, Color, File, Move, MoveFlag, Piece, PieceType, Rank, Square};
