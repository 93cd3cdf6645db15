//! 段（Rank）

use super::Color;

/// 段（1段〜8段）
///
/// Rank1が白陣、Rank8が黒陣。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
}

impl Rank {
    /// 段の数
    pub const NUM: usize = 8;

    /// 全ての段
    pub const ALL: [Rank; 8] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
    ];

    /// u8からRankに変換（0-7）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Rank> {
        if n < 8 {
            // SAFETY: n < 8 なので有効なRank値
            Some(unsafe { std::mem::transmute::<u8, Rank>(n) })
        } else {
            None
        }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// ポーンの初期配置の段
    #[inline]
    pub const fn pawn_start(color: Color) -> Rank {
        match color {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// ポーンが成る段（最終段）
    #[inline]
    pub const fn promotion(color: Color) -> Rank {
        match color {
            Color::White => Rank::Rank8,
            Color::Black => Rank::Rank1,
        }
    }

    /// 代数記法の文字（'1'-'8'）に変換
    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }

    /// 代数記法の文字からRankに変換
    #[inline]
    pub const fn from_char(c: char) -> Option<Rank> {
        let n = (c as u8).wrapping_sub(b'1');
        Rank::from_u8(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_from_u8() {
        assert_eq!(Rank::from_u8(0), Some(Rank::Rank1));
        assert_eq!(Rank::from_u8(7), Some(Rank::Rank8));
        assert_eq!(Rank::from_u8(8), None);
    }

    #[test]
    fn test_rank_char() {
        assert_eq!(Rank::Rank1.to_char(), '1');
        assert_eq!(Rank::Rank8.to_char(), '8');
        assert_eq!(Rank::from_char('1'), Some(Rank::Rank1));
        assert_eq!(Rank::from_char('8'), Some(Rank::Rank8));
        assert_eq!(Rank::from_char('9'), None);
        assert_eq!(Rank::from_char('0'), None);
    }

    #[test]
    fn test_rank_pawn_start() {
        assert_eq!(Rank::pawn_start(Color::White), Rank::Rank2);
        assert_eq!(Rank::pawn_start(Color::Black), Rank::Rank7);
    }

    #[test]
    fn test_rank_promotion() {
        assert_eq!(Rank::promotion(Color::White), Rank::Rank8);
        assert_eq!(Rank::promotion(Color::Black), Rank::Rank1);
    }
}
