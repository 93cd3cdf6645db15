//! 升目（Square）
//!
//! 盤面は10×12のメールボックス配列で表現する。8×8の可動領域の
//! 上下に番兵2段、左右に番兵1筋を置くことで、駒の移動オフセットが
//! 盤外に出た場合に隣の段へ回り込まず番兵セルに解決される。
//!
//! ```text
//!  0   1   2   3   4   5   6   7   8   9
//!  10  11  12  13  14  15  16  17  18  19
//!      ________________________________        BLACK
//!  20 |21  22  23  24  25  26  27  28| 29
//!  30 |31  32  33  34  35  36  37  38| 39
//!  40 |41  42  43  44  45  46  47  48| 49
//!  50 |51  52  53  54  55  56  57  58| 59
//!  60 |61  62  63  64  65  66  67  68| 69
//!  70 |71  72  73  74  75  76  77  78| 79
//!  80 |81  82  83  84  85  86  87  88| 89
//!  90 |91  92  93  94  95  96  97  98| 99
//!      ⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻⎻        WHITE
//!  100 101 102 103 104 105 106 107 108 109
//!  110 111 112 113 114 115 116 117 118 119
//! ```
//!
//! 21がa8（黒陣の左上）、98がh1（白陣の右下）。

use super::{File, Rank};

/// 升目（メールボックスインデックス 0-119）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// メールボックスのセル数
    pub const NUM: usize = 120;

    /// 可動領域の升数
    pub const ON_BOARD_NUM: usize = 64;

    // 定数定義（キャスリング処理で使用する升）
    pub const A1: Square = Square::new(File::FileA, Rank::Rank1);
    pub const B1: Square = Square::new(File::FileB, Rank::Rank1);
    pub const C1: Square = Square::new(File::FileC, Rank::Rank1);
    pub const D1: Square = Square::new(File::FileD, Rank::Rank1);
    pub const E1: Square = Square::new(File::FileE, Rank::Rank1);
    pub const F1: Square = Square::new(File::FileF, Rank::Rank1);
    pub const G1: Square = Square::new(File::FileG, Rank::Rank1);
    pub const H1: Square = Square::new(File::FileH, Rank::Rank1);
    pub const A8: Square = Square::new(File::FileA, Rank::Rank8);
    pub const B8: Square = Square::new(File::FileB, Rank::Rank8);
    pub const C8: Square = Square::new(File::FileC, Rank::Rank8);
    pub const D8: Square = Square::new(File::FileD, Rank::Rank8);
    pub const E8: Square = Square::new(File::FileE, Rank::Rank8);
    pub const F8: Square = Square::new(File::FileF, Rank::Rank8);
    pub const G8: Square = Square::new(File::FileG, Rank::Rank8);
    pub const H8: Square = Square::new(File::FileH, Rank::Rank8);

    /// FileとRankからSquareを生成
    ///
    /// 8段目（黒陣）がインデックス21-28、1段目（白陣）が91-98。
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(21 + (7 - rank as u8) * 10 + file as u8)
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < Self::NUM as u8 {
            Some(Square(n))
        } else {
            None
        }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// 可動領域内（番兵でない）かどうか
    #[inline]
    pub const fn is_on_board(self) -> bool {
        let row = self.0 / 10;
        let col = self.0 % 10;
        row >= 2 && row <= 9 && col >= 1 && col <= 8
    }

    /// 筋を取得
    ///
    /// 可動領域内の升であることが契約。番兵に対しては呼び出さないこと。
    #[inline]
    pub const fn file(self) -> File {
        debug_assert!(self.is_on_board());
        // SAFETY: 可動領域内なので self.0 % 10 は 1..=8、減算後は 0..=7 で有効なFile値
        unsafe { std::mem::transmute(self.0 % 10 - 1) }
    }

    /// 段を取得
    ///
    /// 可動領域内の升であることが契約。番兵に対しては呼び出さないこと。
    #[inline]
    pub const fn rank(self) -> Rank {
        debug_assert!(self.is_on_board());
        // SAFETY: 可動領域内なので self.0 / 10 は 2..=9、9からの減算後は 0..=7 で有効なRank値
        unsafe { std::mem::transmute(9 - self.0 / 10) }
    }

    /// オフセットを加えた升を返す
    ///
    /// 可動領域内の升に対して±21以内のオフセットを加える限り、
    /// 結果は必ずメールボックス内（番兵を含む）に収まる。
    #[inline]
    pub const fn offset(self, d: i8) -> Square {
        let n = self.0 as i16 + d as i16;
        debug_assert!(n >= 0 && n < Self::NUM as i16);
        Square(n as u8)
    }

    /// 2升の中間の升を返す
    ///
    /// キャスリングの通過升と2升前進のアンパッサン対象升の計算に使う。
    /// 同じ段または同じ筋で偶数距離にある2升が契約。
    #[inline]
    pub const fn midpoint(a: Square, b: Square) -> Square {
        Square((a.0 + b.0) / 2)
    }

    /// 代数記法の文字列（"e4"等）に変換
    pub fn to_algebraic(self) -> String {
        let file = self.file().to_char();
        let rank = self.rank().to_char();
        format!("{file}{rank}")
    }

    /// 代数記法の文字列からSquareに変換
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_char(chars.next()?)?;
        let rank = Rank::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// 可動領域内の全ての升を返すイテレータ（a8, b8, ..., h1の順）
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::ALL
            .iter()
            .rev()
            .flat_map(|&rank| File::ALL.iter().map(move |&file| Square::new(file, rank)))
    }
}
