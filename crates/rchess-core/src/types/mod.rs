//! 基本型モジュール
//!
//! チェスの局面表現で使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! File, Rank
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece ← Move
//!
//! CastlingRights は独立
//! ```

mod castling;
mod color;
mod file;
mod moves;
mod piece;
mod piece_type;
mod rank;
mod square;

pub use castling::CastlingRights;
pub use color::Color;
pub use file::File;
pub use moves::{Move, MoveFlag};
pub use piece::Piece;
pub use piece_type::PieceType;
pub use rank::Rank;
pub use square::Square;
