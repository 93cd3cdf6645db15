//! 駒（Piece）
//!
//! 内部表現は4bitのパック値 + 番兵。
//! - bit 0-2: `PieceType`（1..=6）。0 は `Piece::EMPTY` のみで使用される。
//! - bit 3: `Color`（0 = White, 1 = Black）。
//! - `0xFF` は盤外の番兵セル専用の `Piece::OFFBOARD`。
//!
//! `EMPTY`・`OFFBOARD`・全ての有効な駒種/色の組み合わせは互いに異なる値を
//! 持ち、空マスと盤外が混同されることはない。
//! `piece_type()` / `color()` は `is_piece()` が真の場合にのみ呼び出すのが契約。

use super::{Color, PieceType};

/// 駒（色の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    /// 空マス
    pub const EMPTY: Piece = Piece(0);

    /// 盤外の番兵
    pub const OFFBOARD: Piece = Piece(0xFF);

    // 白の駒
    pub const W_PAWN: Piece = Piece(1);
    pub const W_KNIGHT: Piece = Piece(2);
    pub const W_BISHOP: Piece = Piece(3);
    pub const W_ROOK: Piece = Piece(4);
    pub const W_QUEEN: Piece = Piece(5);
    pub const W_KING: Piece = Piece(6);

    // 黒の駒（+8）
    pub const B_PAWN: Piece = Piece(9);
    pub const B_KNIGHT: Piece = Piece(10);
    pub const B_BISHOP: Piece = Piece(11);
    pub const B_ROOK: Piece = Piece(12);
    pub const B_QUEEN: Piece = Piece(13);
    pub const B_KING: Piece = Piece(14);

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece(piece_type as u8 | ((color as u8) << 3))
    }

    /// 駒種を取得
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        debug_assert!(self.is_piece());
        // SAFETY: is_piece() が真なら self.0 & 0x07 は 1..=6 で有効なPieceType値
        unsafe { std::mem::transmute(self.0 & 0x07) }
    }

    /// 色を取得
    #[inline]
    pub const fn color(self) -> Color {
        debug_assert!(self.is_piece());
        // SAFETY: (self.0 >> 3) & 1 は 0 or 1 なので有効なColor値
        unsafe { std::mem::transmute((self.0 >> 3) & 1) }
    }

    /// 盤上の駒（空マスでも番兵でもない）かどうか
    #[inline]
    pub const fn is_piece(self) -> bool {
        self.0 != 0 && self.0 != 0xFF
    }

    /// 空マスかどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 盤外の番兵かどうか
    #[inline]
    pub const fn is_offboard(self) -> bool {
        self.0 == 0xFF
    }

    /// 指定した色の駒かどうか
    #[inline]
    pub const fn is_color(self, color: Color) -> bool {
        self.is_piece() && (self.0 >> 3) & 1 == color as u8
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 内部値から生成（Moveのパック表現の復元用）
    ///
    /// 有効なパック値（EMPTY・OFFBOARD・駒）であることが契約。
    #[inline]
    pub(crate) const fn from_raw(n: u8) -> Piece {
        Piece(n)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}
