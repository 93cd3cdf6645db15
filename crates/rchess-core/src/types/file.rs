//! 筋（File）

/// 筋（a筋〜h筋）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    FileA = 0,
    FileB = 1,
    FileC = 2,
    FileD = 3,
    FileE = 4,
    FileF = 5,
    FileG = 6,
    FileH = 7,
}

impl File {
    /// 筋の数
    pub const NUM: usize = 8;

    /// 全ての筋
    pub const ALL: [File; 8] = [
        File::FileA,
        File::FileB,
        File::FileC,
        File::FileD,
        File::FileE,
        File::FileF,
        File::FileG,
        File::FileH,
    ];

    /// u8からFileに変換（0-7）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<File> {
        if n < 8 {
            // SAFETY: n < 8 なので有効なFile値
            Some(unsafe { std::mem::transmute::<u8, File>(n) })
        } else {
            None
        }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 代数記法の文字（'a'-'h'）に変換
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// 代数記法の文字からFileに変換
    #[inline]
    pub const fn from_char(c: char) -> Option<File> {
        let n = (c as u8).wrapping_sub(b'a');
        File::from_u8(n)
    }
}
