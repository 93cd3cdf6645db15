//! 局面の付随状態（StateInfo）
//!
//! 盤面配列から導出できない状態（キャスリング権・アンパッサン升・
//! 50手カウンタ）を保持する。指し手を適用するたびに直前の状態を
//! `previous` に積み、巻き戻し時にそのまま取り出して復元する。

use crate::types::{CastlingRights, Move, Square};

/// 1手ごとにスタック状に積まれる局面状態
#[derive(Debug, Clone)]
pub struct StateInfo {
    /// キャスリング権
    pub castling: CastlingRights,
    /// アンパッサンの標的升（直前の手が2マス前進だった場合のみ）
    pub en_passant: Option<Square>,
    /// 50手ルール用カウンタ（ポーンの移動と駒取りでリセット）
    pub halfmove_clock: u32,
    /// この状態に至った指し手
    pub last_move: Option<Move>,
    /// 1手前の状態
    pub previous: Option<Box<StateInfo>>,
}

impl StateInfo {
    pub fn new() -> StateInfo {
        StateInfo {
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            last_move: None,
            previous: None,
        }
    }

    /// 積まれている状態の数（初期状態を含む）
    pub fn depth(&self) -> usize {
        let mut n = 1;
        let mut cur = self;
        while let Some(prev) = &cur.previous {
            n += 1;
            cur = prev;
        }
        n
    }
}

impl Default for StateInfo {
    fn default() -> StateInfo {
        StateInfo::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_stack_depth() {
        let mut st = StateInfo::new();
        assert_eq!(st.depth(), 1);
        let prev = std::mem::take(&mut st);
        st.previous = Some(Box::new(prev));
        assert_eq!(st.depth(), 2);
        let restored = *st.previous.take().unwrap();
        assert_eq!(restored.depth(), 1);
    }
}
