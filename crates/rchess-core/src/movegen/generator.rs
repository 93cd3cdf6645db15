//! 疑似合法手の生成
//!
//! 駒の移動ジオメトリ（[`crate::tables`]）に従い、自殺手の検査を
//! しない疑似合法手を列挙する。合法性は適用時に
//! [`Position::make_move`] が判定する。

use crate::position::Position;
use crate::tables;
use crate::types::{Color, Move, MoveFlag, Piece, PieceType, Rank, Square};

use super::movelist::MoveList;

/// 指し手生成器
///
/// 局面を借用して使い捨てる。
pub struct MoveGen<'a> {
    pos: &'a Position,
    moves: MoveList,
}

impl<'a> MoveGen<'a> {
    pub fn new(pos: &'a Position) -> Self {
        MoveGen {
            pos,
            moves: MoveList::new(),
        }
    }

    /// 手番側の全駒の疑似合法手を生成する
    pub fn generate_all(mut self) -> MoveList {
        let us = self.pos.side_to_move();
        for sq in Square::all() {
            if self.pos.piece_on(sq).is_color(us) {
                self.generate_for_square(sq);
            }
        }
        self.moves
    }

    /// 指定升の駒の疑似合法手を生成する
    ///
    /// 駒の色は手番に関係なく、その升にある駒の色に従う。
    /// 空マスを指定した場合は空リストを返す。
    pub fn generate_from(mut self, from: Square) -> MoveList {
        debug_assert!(from.is_on_board());
        if self.pos.piece_on(from).is_piece() {
            self.generate_for_square(from);
        }
        self.moves
    }

    fn generate_for_square(&mut self, from: Square) {
        let pc = self.pos.piece_on(from);
        match pc.piece_type() {
            PieceType::Pawn => self.pawn_moves(from, pc.color()),
            PieceType::Knight => self.leaper_moves(from, pc.color(), &tables::KNIGHT_OFFSETS),
            PieceType::Bishop => self.slider_moves(from, pc.color(), &tables::BISHOP_OFFSETS),
            PieceType::Rook => self.slider_moves(from, pc.color(), &tables::ROOK_OFFSETS),
            PieceType::Queen => self.slider_moves(from, pc.color(), &tables::KING_OFFSETS),
            PieceType::King => {
                self.leaper_moves(from, pc.color(), &tables::KING_OFFSETS);
                self.castle_moves(from, pc.color());
            }
        }
    }

    /// ポーン: 前進（2マス前進・成りを含む）と斜めの駒取り・アンパッサン
    fn pawn_moves(&mut self, from: Square, us: Color) {
        let them = us.opponent();
        let push = tables::pawn_push(us);
        let promo_rank = Rank::promotion(us);

        let ahead = from.offset(push);
        if self.pos.piece_on(ahead).is_empty() {
            self.push_pawn_move(from, ahead, Piece::EMPTY, promo_rank);
            if from.rank() == Rank::pawn_start(us) {
                let ahead2 = ahead.offset(push);
                if self.pos.piece_on(ahead2).is_empty() {
                    self.moves
                        .push(Move::with_flag(from, ahead2, Piece::EMPTY, MoveFlag::DoublePush));
                }
            }
        }

        for d in tables::pawn_captures(us) {
            let to = from.offset(d);
            let target = self.pos.piece_on(to);
            if target.is_color(them) {
                self.push_pawn_move(from, to, target, promo_rank);
            } else if target.is_empty() && self.pos.en_passant() == Some(to) {
                self.moves.push(Move::with_flag(
                    from,
                    to,
                    Piece::new(them, PieceType::Pawn),
                    MoveFlag::EnPassant,
                ));
            }
        }
    }

    /// 最終段への到達なら4種の成りを、それ以外は通常の手を積む
    fn push_pawn_move(&mut self, from: Square, to: Square, captured: Piece, promo_rank: Rank) {
        if to.rank() == promo_rank {
            for pt in PieceType::PROMOTION_TARGETS {
                self.moves
                    .push(Move::with_flag(from, to, captured, MoveFlag::from_promotion(pt)));
            }
        } else {
            self.moves.push(Move::new(from, to, captured));
        }
    }

    /// ナイト・キング: オフセット先が空マスか相手駒なら1手
    fn leaper_moves(&mut self, from: Square, us: Color, offsets: &[i8]) {
        let them = us.opponent();
        for &d in offsets {
            let to = from.offset(d);
            let target = self.pos.piece_on(to);
            if target.is_empty() {
                self.moves.push(Move::new(from, to, Piece::EMPTY));
            } else if target.is_color(them) {
                self.moves.push(Move::new(from, to, target));
            }
        }
    }

    /// 飛び駒: 各方向に駒か番兵に当たるまで走査
    fn slider_moves(&mut self, from: Square, us: Color, offsets: &[i8]) {
        let them = us.opponent();
        for &d in offsets {
            let mut to = from.offset(d);
            loop {
                let target = self.pos.piece_on(to);
                if target.is_empty() {
                    self.moves.push(Move::new(from, to, Piece::EMPTY));
                    to = to.offset(d);
                    continue;
                }
                if target.is_color(them) {
                    self.moves.push(Move::new(from, to, target));
                }
                break;
            }
        }
    }

    /// キャスリング: 権利が残っていてキングとルークの間が空いていれば
    /// 生成する。通過升への利きの検査は適用時に行われる。
    fn castle_moves(&mut self, from: Square, us: Color) {
        let rights = self.pos.castling();
        let home = match us {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };
        if from != home {
            return;
        }
        let (ks_between, ks_to, qs_between, qs_to): (&[Square], _, &[Square], _) = match us {
            Color::White => (
                &[Square::F1, Square::G1],
                Square::G1,
                &[Square::D1, Square::C1, Square::B1],
                Square::C1,
            ),
            Color::Black => (
                &[Square::F8, Square::G8],
                Square::G8,
                &[Square::D8, Square::C8, Square::B8],
                Square::C8,
            ),
        };
        if rights.king_side(us) && self.all_empty(ks_between) {
            self.moves
                .push(Move::with_flag(from, ks_to, Piece::EMPTY, MoveFlag::Castle));
        }
        if rights.queen_side(us) && self.all_empty(qs_between) {
            self.moves
                .push(Move::with_flag(from, qs_to, Piece::EMPTY, MoveFlag::Castle));
        }
    }

    fn all_empty(&self, squares: &[Square]) -> bool {
        squares.iter().all(|&sq| self.pos.piece_on(sq).is_empty())
    }
}

/// 手番側の全疑似合法手を生成する
pub fn generate_all(pos: &Position) -> MoveList {
    MoveGen::new(pos).generate_all()
}

/// 指定升の駒の疑似合法手を生成する
pub fn generate_from(pos: &Position, from: Square) -> MoveList {
    MoveGen::new(pos).generate_from(from)
}
