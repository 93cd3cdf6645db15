//! 駒種（PieceType）

/// 駒種（色の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceType {
    /// 有効な駒種の数（1-6）
    pub const NUM: usize = 6;

    /// ポーンが成れる駒種（生成順）
    pub const PROMOTION_TARGETS: [PieceType; 4] = [
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
    ];

    /// 遠方駒（ビショップ・ルーク・クイーン）かどうか
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    /// インデックス（1-6）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// u8から変換（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<PieceType> {
        if n >= 1 && n <= 6 {
            // SAFETY: 1 <= n <= 6 なので有効なPieceType値
            Some(unsafe { std::mem::transmute::<u8, PieceType>(n) })
        } else {
            None
        }
    }
}
