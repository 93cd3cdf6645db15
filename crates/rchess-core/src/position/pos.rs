//! 局面（Position）
//!
//! 10x12メールボックス盤・手番・キング位置キャッシュと、
//! [`StateInfo`]による状態スタックを束ねた中心構造体。
//! 指し手の適用（make_move）と巻き戻し(unmake_move)、
//! 利き判定(is_attacked)を提供する。

use crate::tables;
use crate::types::{CastlingRights, Color, Move, MoveFlag, Piece, PieceType, Square};

use super::state::StateInfo;

/// 局面
#[derive(Debug, Clone)]
pub struct Position {
    /// 10x12メールボックス。可動領域外は Piece::OFFBOARD
    board: [Piece; Square::NUM],
    /// 色ごとのキング位置キャッシュ（キング不在の局面も許容する）
    king_square: [Option<Square>; Color::NUM],
    /// 手番
    side_to_move: Color,
    /// 手数（黒が指すたびに加算）
    fullmove_number: u32,
    /// 現在の付随状態（スタックの先頭）
    state: StateInfo,
}

impl Position {
    /// 駒のない局面を生成
    pub fn new() -> Position {
        let mut board = [Piece::OFFBOARD; Square::NUM];
        for sq in Square::all() {
            board[sq.index()] = Piece::EMPTY;
        }
        Position {
            board,
            king_square: [None; Color::NUM],
            side_to_move: Color::White,
            fullmove_number: 1,
            state: StateInfo::new(),
        }
    }

    /// 指定升の駒を取得
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.board[sq.index()]
    }

    /// 手番を取得
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// キャスリング権を取得
    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.state.castling
    }

    /// アンパッサンの標的升を取得
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.state.en_passant
    }

    /// 50手ルール用カウンタを取得
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.state.halfmove_clock
    }

    /// 手数を取得
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// 指定色のキング位置を取得
    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.king_square[color.index()]
    }

    /// 直前に適用された指し手を取得
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.state.last_move
    }

    /// 適用済みの手数（状態スタックの深さ - 1）
    pub fn ply(&self) -> usize {
        self.state.depth() - 1
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_fullmove_number(&mut self, n: u32) {
        self.fullmove_number = n;
    }

    pub(crate) fn state_mut(&mut self) -> &mut StateInfo {
        &mut self.state
    }

    /// 駒を置く（キング位置キャッシュも更新）
    pub(crate) fn put_piece(&mut self, sq: Square, pc: Piece) {
        debug_assert!(sq.is_on_board());
        debug_assert!(pc.is_piece());
        self.board[sq.index()] = pc;
        if pc.piece_type() == PieceType::King {
            self.king_square[pc.color().index()] = Some(sq);
        }
    }

    /// 駒を取り除く
    pub(crate) fn remove_piece(&mut self, sq: Square) {
        debug_assert!(sq.is_on_board());
        let pc = self.board[sq.index()];
        if pc.is_piece() && pc.piece_type() == PieceType::King {
            self.king_square[pc.color().index()] = None;
        }
        self.board[sq.index()] = Piece::EMPTY;
    }

    /// 指定升に指定色の利きがあるか
    ///
    /// 指し手生成と同じオフセットテーブルを逆向きに辿る。飛び駒の
    /// 走査は最初の駒または番兵で必ず停止する。
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        debug_assert!(sq.is_on_board());

        // ポーン: sqを取れる位置に相手ポーンがいるか
        for d in tables::pawn_captures(by) {
            let pc = self.board[sq.offset(-d).index()];
            if pc.is_color(by) && pc.piece_type() == PieceType::Pawn {
                return true;
            }
        }

        // ナイトとキング（1歩駒）
        for &d in &tables::KNIGHT_OFFSETS {
            let pc = self.board[sq.offset(d).index()];
            if pc.is_color(by) && pc.piece_type() == PieceType::Knight {
                return true;
            }
        }
        for &d in &tables::KING_OFFSETS {
            let pc = self.board[sq.offset(d).index()];
            if pc.is_color(by) && pc.piece_type() == PieceType::King {
                return true;
            }
        }

        // 飛び駒（斜め: ビショップ/クイーン、縦横: ルーク/クイーン）
        self.ray_attacked(sq, by, &tables::BISHOP_OFFSETS, PieceType::Bishop)
            || self.ray_attacked(sq, by, &tables::ROOK_OFFSETS, PieceType::Rook)
    }

    fn ray_attacked(&self, sq: Square, by: Color, dirs: &[i8], slider: PieceType) -> bool {
        for &d in dirs {
            let mut cur = sq.offset(d);
            loop {
                let pc = self.board[cur.index()];
                if pc.is_offboard() {
                    break;
                }
                if pc.is_piece() {
                    if pc.is_color(by) {
                        let pt = pc.piece_type();
                        if pt == slider || pt == PieceType::Queen {
                            return true;
                        }
                    }
                    break;
                }
                cur = cur.offset(d);
            }
        }
        false
    }

    /// 指定色のキングに王手がかかっているか
    ///
    /// キング不在の局面では常にfalse。
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_square[color.index()] {
            Some(ksq) => self.is_attacked(ksq, color.opponent()),
            None => false,
        }
    }

    /// 指し手を適用する
    ///
    /// 盤面・手番・付随状態をすべて更新したうえで合法性を返す。
    /// falseが返った場合、局面は疑似合法手を適用した状態のままなので
    /// 呼び出し側が [`unmake_move`](Self::unmake_move) で巻き戻すこと。
    ///
    /// # Panics
    ///
    /// 移動元に手番側の駒がない指し手を渡した場合はパニックする。
    pub fn make_move(&mut self, m: Move) -> bool {
        let us = self.side_to_move;
        let them = us.opponent();
        let from = m.from();
        let to = m.to();
        let flag = m.flag();

        assert!(
            from.is_on_board() && to.is_on_board(),
            "move {}->{} is outside the playable area",
            from.raw(),
            to.raw()
        );
        let moved = self.board[from.index()];
        assert!(moved.is_color(us), "no {} piece on {}", us.name(), from.to_algebraic());
        log::trace!("make {m} ({})", us.name());

        // 現在の状態をスタックに積む
        let new_state = StateInfo {
            castling: self.state.castling,
            en_passant: None,
            halfmove_clock: self.state.halfmove_clock + 1,
            last_move: Some(m),
            previous: None,
        };
        let prev = std::mem::replace(&mut self.state, new_state);
        self.state.previous = Some(Box::new(prev));

        // 駒取り。アンパッサンでは移動先ではなく通過されたポーンを除く
        if m.is_capture() {
            let cap_sq = if flag == MoveFlag::EnPassant {
                to.offset(-tables::pawn_push(us))
            } else {
                to
            };
            self.remove_piece(cap_sq);
            self.state.halfmove_clock = 0;
        }

        // 駒の移動（成りなら移動先に成り駒を置く）
        self.remove_piece(from);
        match flag.promotion() {
            Some(pt) => self.put_piece(to, Piece::new(us, pt)),
            None => self.put_piece(to, moved),
        }

        if moved.piece_type() == PieceType::Pawn {
            self.state.halfmove_clock = 0;
        }

        // キャスリングはルークも動かす
        if flag == MoveFlag::Castle {
            let (rook_from, rook_to) = castle_rook_squares(to);
            let rook = self.board[rook_from.index()];
            self.remove_piece(rook_from);
            self.put_piece(rook_to, rook);
        }

        // 2マス前進は通過升をアンパッサンの標的にする
        if flag == MoveFlag::DoublePush {
            self.state.en_passant = Some(Square::midpoint(from, to));
        }

        self.update_castling_rights(from, to);

        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;

        // 合法性: 自分のキングが取られる手は指せない。キャスリングは
        // 開始升と通過升にも相手の利きがあってはならない（開始升の
        // チェックが「王手中はキャスリング不可」を兼ねる）
        if let Some(ksq) = self.king_square[us.index()] {
            if self.is_attacked(ksq, them) {
                return false;
            }
            if flag == MoveFlag::Castle
                && (self.is_attacked(from, them)
                    || self.is_attacked(Square::midpoint(from, to), them))
            {
                return false;
            }
        }
        true
    }

    /// 指し手を巻き戻す
    ///
    /// 直前に [`make_move`](Self::make_move) で適用した指し手を渡すこと。
    /// 盤面・手番・キャスリング権・アンパッサン升・各カウンタが
    /// 適用前の値に完全に復元される。
    pub fn unmake_move(&mut self, m: Move) {
        let us = self.side_to_move.opponent();
        let from = m.from();
        let to = m.to();
        let flag = m.flag();
        log::trace!("unmake {m} ({})", us.name());

        self.side_to_move = us;
        if us == Color::Black {
            self.fullmove_number -= 1;
        }

        // 駒を戻す（成りはポーンに戻す）
        let placed = self.board[to.index()];
        self.remove_piece(to);
        match flag.promotion() {
            Some(_) => self.put_piece(from, Piece::new(us, PieceType::Pawn)),
            None => self.put_piece(from, placed),
        }

        // 取った駒を戻す
        if m.is_capture() {
            let cap_sq = if flag == MoveFlag::EnPassant {
                to.offset(-tables::pawn_push(us))
            } else {
                to
            };
            self.put_piece(cap_sq, m.captured());
        }

        // ルークを戻す
        if flag == MoveFlag::Castle {
            let (rook_from, rook_to) = castle_rook_squares(to);
            let rook = self.board[rook_to.index()];
            self.remove_piece(rook_to);
            self.put_piece(rook_from, rook);
        }

        // 状態スタックを1段戻す
        let prev = self.state.previous.take().unwrap();
        self.state = *prev;
    }

    /// キャスリング権の失効処理
    ///
    /// キングの初期升から動けば両翼、ルークの初期升から動くか
    /// その升への駒取りが起きれば該当翼の権利が消える。
    fn update_castling_rights(&mut self, from: Square, to: Square) {
        let c = &mut self.state.castling;
        if !c.any() {
            return;
        }
        if from == Square::E1 {
            c.clear_color(Color::White);
        }
        if from == Square::E8 {
            c.clear_color(Color::Black);
        }
        if from == Square::H1 || to == Square::H1 {
            c.white_king_side = false;
        }
        if from == Square::A1 || to == Square::A1 {
            c.white_queen_side = false;
        }
        if from == Square::H8 || to == Square::H8 {
            c.black_king_side = false;
        }
        if from == Square::A8 || to == Square::A8 {
            c.black_queen_side = false;
        }
    }
}

/// キングの移動先からルークの(移動元, 移動先)を引く
fn castle_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to {
        Square::G1 => (Square::H1, Square::F1),
        Square::C1 => (Square::A1, Square::D1),
        Square::G8 => (Square::H8, Square::F8),
        Square::C8 => (Square::A8, Square::D8),
        _ => unreachable!("castle king destination must be c1/g1/c8/g8"),
    }
}

impl Default for Position {
    fn default() -> Position {
        Position::new()
    }
}
