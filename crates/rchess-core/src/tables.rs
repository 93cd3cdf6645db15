//! 駒の移動ジオメトリテーブル
//!
//! 10x12メールボックス上のオフセット定義。指し手生成と利き判定の
//! 両方がこのテーブルを参照する。盤面は8段目が先頭（インデックス21）
//! なので、白の前進は-10、黒の前進は+10になる。

use crate::types::{Color, PieceType};

/// ナイトの移動オフセット
pub const KNIGHT_OFFSETS: [i8; 8] = [-21, -19, -12, -8, 8, 12, 19, 21];

/// ビショップの移動オフセット（斜め4方向）
pub const BISHOP_OFFSETS: [i8; 4] = [-11, -9, 9, 11];

/// ルークの移動オフセット（縦横4方向）
pub const ROOK_OFFSETS: [i8; 4] = [-10, -1, 1, 10];

/// キング・クイーンの移動オフセット（全8方向）
pub const KING_OFFSETS: [i8; 8] = [-11, -10, -9, -1, 1, 9, 10, 11];

/// 駒種ごとの移動オフセットを返す
///
/// ポーンは方向が手番に依存するため対象外（[`pawn_push`] /
/// [`pawn_captures`] を使う）。
#[inline]
pub const fn offsets(pt: PieceType) -> &'static [i8] {
    match pt {
        PieceType::Knight => &KNIGHT_OFFSETS,
        PieceType::Bishop => &BISHOP_OFFSETS,
        PieceType::Rook => &ROOK_OFFSETS,
        PieceType::Queen | PieceType::King => &KING_OFFSETS,
        PieceType::Pawn => &[],
    }
}

/// ポーンの前進オフセット
#[inline]
pub const fn pawn_push(color: Color) -> i8 {
    match color {
        Color::White => -10,
        Color::Black => 10,
    }
}

/// ポーンの駒取りオフセット（斜め前方2方向）
#[inline]
pub const fn pawn_captures(color: Color) -> [i8; 2] {
    match color {
        Color::White => [-11, -9],
        Color::Black => [9, 11],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_per_piece_type() {
        assert_eq!(offsets(PieceType::Knight).len(), 8);
        assert_eq!(offsets(PieceType::Bishop).len(), 4);
        assert_eq!(offsets(PieceType::Rook).len(), 4);
        assert_eq!(offsets(PieceType::Queen).len(), 8);
        assert_eq!(offsets(PieceType::King).len(), 8);
        assert!(offsets(PieceType::Pawn).is_empty());
    }

    #[test]
    fn test_offsets_symmetric() {
        // すべての方向テーブルは点対称（dがあれば-dもある）
        for pt in [
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Rook,
            PieceType::Queen,
        ] {
            for &d in offsets(pt) {
                assert!(offsets(pt).contains(&(-d)), "{pt:?} missing {}", -d);
            }
        }
    }

    #[test]
    fn test_queen_is_bishop_plus_rook() {
        for &d in &BISHOP_OFFSETS {
            assert!(KING_OFFSETS.contains(&d));
        }
        for &d in &ROOK_OFFSETS {
            assert!(KING_OFFSETS.contains(&d));
        }
    }

    #[test]
    fn test_pawn_directions_oppose() {
        assert_eq!(pawn_push(Color::White), -pawn_push(Color::Black));
        let w = pawn_captures(Color::White);
        let b = pawn_captures(Color::Black);
        assert_eq!(w, [-b[1], -b[0]]);
    }
}
