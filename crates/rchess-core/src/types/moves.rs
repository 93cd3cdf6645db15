//! 指し手（Move）
//!
//! 32bitのパック表現:
//! - bit 0-6:   移動先 (to)
//! - bit 7-13:  移動元 (from)
//! - bit 14-16: 特殊フラグ (MoveFlag)
//! - bit 17-24: 取った駒のパック値 (captured)
//!
//! 取った駒を指し手自体が保持することで、巻き戻し時に盤面を正確に
//! 復元できる。アンパッサンの場合は移動先ではなく実際に取り除かれた
//! ポーンが記録される。

use super::{Piece, PieceType, Square};

/// 指し手の特殊フラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    None = 0,
    EnPassant = 1,
    PromoteKnight = 2,
    PromoteBishop = 3,
    PromoteRook = 4,
    PromoteQueen = 5,
    Castle = 6,
    DoublePush = 7,
}

impl MoveFlag {
    /// 成り先の駒種を返す（成りフラグでなければNone）
    #[inline]
    pub const fn promotion(self) -> Option<PieceType> {
        match self {
            MoveFlag::PromoteKnight => Some(PieceType::Knight),
            MoveFlag::PromoteBishop => Some(PieceType::Bishop),
            MoveFlag::PromoteRook => Some(PieceType::Rook),
            MoveFlag::PromoteQueen => Some(PieceType::Queen),
            _ => None,
        }
    }

    /// 成り先の駒種からフラグを生成
    #[inline]
    pub const fn from_promotion(pt: PieceType) -> MoveFlag {
        match pt {
            PieceType::Knight => MoveFlag::PromoteKnight,
            PieceType::Bishop => MoveFlag::PromoteBishop,
            PieceType::Rook => MoveFlag::PromoteRook,
            _ => MoveFlag::PromoteQueen,
        }
    }
}

/// 指し手（32bit）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u32);

impl Move {
    /// 無効手（バッファの初期値用）
    pub const NONE: Move = Move(0);

    const TO_MASK: u32 = 0x007F; // bit 0-6
    const FROM_SHIFT: u32 = 7;
    const FROM_MASK: u32 = 0x7F << Self::FROM_SHIFT; // bit 7-13
    const FLAG_SHIFT: u32 = 14;
    const FLAG_MASK: u32 = 0x07 << Self::FLAG_SHIFT; // bit 14-16
    const CAPTURED_SHIFT: u32 = 17;
    const CAPTURED_MASK: u32 = 0xFF << Self::CAPTURED_SHIFT; // bit 17-24

    /// 通常の指し手を生成
    #[inline]
    pub const fn new(from: Square, to: Square, captured: Piece) -> Move {
        Move::with_flag(from, to, captured, MoveFlag::None)
    }

    /// フラグ付きの指し手を生成
    #[inline]
    pub const fn with_flag(from: Square, to: Square, captured: Piece, flag: MoveFlag) -> Move {
        Move(
            (to.raw() as u32)
                | ((from.raw() as u32) << Self::FROM_SHIFT)
                | ((flag as u32) << Self::FLAG_SHIFT)
                | ((captured.raw() as u32) << Self::CAPTURED_SHIFT),
        )
    }

    /// 移動元を取得
    #[inline]
    pub const fn from(self) -> Square {
        // パック時にSquareの生値を格納しているので復元は常に有効
        match Square::from_u8(((self.0 & Self::FROM_MASK) >> Self::FROM_SHIFT) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// 移動先を取得
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_u8((self.0 & Self::TO_MASK) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// 特殊フラグを取得
    #[inline]
    pub const fn flag(self) -> MoveFlag {
        // SAFETY: bit 14-16 の3bitは 0..=7 で、MoveFlagは全8値を定義している
        unsafe { std::mem::transmute(((self.0 & Self::FLAG_MASK) >> Self::FLAG_SHIFT) as u8) }
    }

    /// 取った駒を取得（取っていなければ Piece::EMPTY）
    #[inline]
    pub const fn captured(self) -> Piece {
        Piece::from_raw(((self.0 & Self::CAPTURED_MASK) >> Self::CAPTURED_SHIFT) as u8)
    }

    /// 駒を取る指し手か
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured().is_piece()
    }

    /// 成りの指し手か
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.flag().promotion().is_some()
    }
}

impl std::fmt::Display for Move {
    /// "e2e4" / "e7e8q" 形式で表示
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from().to_algebraic(), self.to().to_algebraic())?;
        match self.flag().promotion() {
            Some(PieceType::Knight) => write!(f, "n"),
            Some(PieceType::Bishop) => write!(f, "b"),
            Some(PieceType::Rook) => write!(f, "r"),
            Some(PieceType::Queen) => write!(f, "q"),
            _ => Ok(()),
        }
    }
}
