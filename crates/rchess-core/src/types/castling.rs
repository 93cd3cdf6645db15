//! キャスリング権（CastlingRights）
//!
//! 色×サイドの4つの権利を独立したbool名義で保持する。配列＋暗黙の
//! インデックス規約だと順序の取り違えが起きやすいため、名前付きフィールド
//! に固定する。権利は失われるのみで、一度失うと再付与されない。

use super::Color;

/// キャスリング権（4つの独立したフラグ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    /// 全ての権利なし
    pub const NONE: CastlingRights = CastlingRights {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    /// 全ての権利あり（初期局面）
    pub const ALL: CastlingRights = CastlingRights {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    /// いずれかの権利が残っているか
    #[inline]
    pub const fn any(self) -> bool {
        self.white_king_side || self.white_queen_side || self.black_king_side || self.black_queen_side
    }

    /// 指定した色のキングサイドの権利
    #[inline]
    pub const fn king_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    /// 指定した色のクイーンサイドの権利
    #[inline]
    pub const fn queen_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    /// 指定した色の両方の権利を失う（キングが動いた場合）
    #[inline]
    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }

    /// FEN形式の文字列（"KQkq" / "-"等）に変換
    pub fn to_fen_field(self) -> String {
        if !self.any() {
            return "-".to_string();
        }
        let mut result = String::new();
        if self.white_king_side {
            result.push('K');
        }
        if self.white_queen_side {
            result.push('Q');
        }
        if self.black_king_side {
            result.push('k');
        }
        if self.black_queen_side {
            result.push('q');
        }
        result
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::NONE
    }
}
