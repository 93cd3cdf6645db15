//! FEN（Forsyth-Edwards Notation）の読み書き
//!
//! 6フィールド（盤面・手番・キャスリング権・アンパッサン升・
//! 50手カウンタ・手数）をパースして [`Position`] を構築する。
//! テスト用の断片的な局面も扱えるよう、キングの存在は要求しない。

use log::debug;
use thiserror::Error;

use crate::types::{CastlingRights, Color, File, Piece, PieceType, Rank, Square};

use super::pos::Position;

/// 平手初期局面のFEN
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// FENのパースエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have 6 fields, found {0}")]
    FieldCount(usize),
    #[error("board field must have 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank '{0}' does not describe exactly 8 files")]
    RankWidth(String),
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),
    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),
    #[error("invalid en passant field '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}

/// FENの駒文字をPieceに変換
fn piece_from_fen(c: char) -> Option<Piece> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let pt = match c.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return None,
    };
    Some(Piece::new(color, pt))
}

/// PieceをFENの駒文字に変換
pub(crate) fn piece_to_fen(pc: Piece) -> char {
    let c = match pc.piece_type() {
        PieceType::Pawn => 'p',
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Rook => 'r',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    };
    match pc.color() {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

fn parse_castling(s: &str) -> Result<CastlingRights, FenError> {
    let mut rights = CastlingRights::NONE;
    if s == "-" {
        return Ok(rights);
    }
    for c in s.chars() {
        match c {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(FenError::InvalidCastling(s.to_string())),
        }
    }
    Ok(rights)
}

impl Position {
    /// FEN文字列から局面を構築する
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let mut pos = Position::new();
        pos.set_fen(fen)?;
        Ok(pos)
    }

    /// 平手初期局面を構築する
    pub fn startpos() -> Position {
        // 定数FENのパースは失敗しない
        match Position::from_fen(START_FEN) {
            Ok(pos) => pos,
            Err(e) => unreachable!("start position FEN failed to parse: {e}"),
        }
    }

    /// 局面をFEN文字列で設定する
    ///
    /// 失敗した場合、selfの内容は未規定（部分的に書き換わっている
    /// ことがある）。
    pub fn set_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::FieldCount(fields.len()));
        }

        *self = Position::new();
        self.parse_board(fields[0])?;

        self.set_side_to_move(match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidSideToMove(other.to_string())),
        });

        self.state_mut().castling = parse_castling(fields[2])?;

        self.state_mut().en_passant = match fields[3] {
            "-" => None,
            s => Some(
                Square::from_algebraic(s)
                    .ok_or_else(|| FenError::InvalidEnPassant(s.to_string()))?,
            ),
        };

        self.state_mut().halfmove_clock = fields[4]
            .parse()
            .map_err(|_| FenError::InvalidCounter(fields[4].to_string()))?;
        self.set_fullmove_number(
            fields[5]
                .parse()
                .map_err(|_| FenError::InvalidCounter(fields[5].to_string()))?,
        );

        debug!("position set from FEN: {fen}");
        Ok(())
    }

    /// 盤面フィールド（"rnbqkbnr/..."）をパース
    fn parse_board(&mut self, field: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = field.split('/').collect();
        if ranks.len() != Rank::NUM {
            return Err(FenError::RankCount(ranks.len()));
        }
        // FENは8段目から記述される
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = match Rank::from_u8((7 - i) as u8) {
                Some(r) => r,
                None => unreachable!(),
            };
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let pc = piece_from_fen(c).ok_or(FenError::InvalidPiece(c))?;
                    let f = File::from_u8(file)
                        .ok_or_else(|| FenError::RankWidth(rank_str.to_string()))?;
                    self.put_piece(Square::new(f, rank), pc);
                    file += 1;
                }
            }
            if file != File::NUM as u8 {
                return Err(FenError::RankWidth(rank_str.to_string()));
            }
        }
        Ok(())
    }

    /// 局面をFEN文字列に変換する
    pub fn to_fen(&self) -> String {
        let mut board = String::new();
        for (i, &rank) in Rank::ALL.iter().rev().enumerate() {
            if i > 0 {
                board.push('/');
            }
            let mut empties = 0;
            for &file in &File::ALL {
                let pc = self.piece_on(Square::new(file, rank));
                if pc.is_empty() {
                    empties += 1;
                } else {
                    if empties > 0 {
                        board.push_str(&empties.to_string());
                        empties = 0;
                    }
                    board.push(piece_to_fen(pc));
                }
            }
            if empties > 0 {
                board.push_str(&empties.to_string());
            }
        }

        let side = match self.side_to_move() {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = match self.en_passant() {
            Some(sq) => sq.to_algebraic(),
            None => "-".to_string(),
        };

        format!(
            "{} {} {} {} {} {}",
            board,
            side,
            self.castling().to_fen_field(),
            ep,
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_layout() {
        let pos = Position::startpos();
        assert_eq!(pos.piece_on(Square::E1), Piece::W_KING);
        assert_eq!(pos.piece_on(Square::E8), Piece::B_KING);
        assert_eq!(pos.piece_on(Square::A1), Piece::W_ROOK);
        assert_eq!(pos.piece_on(Square::H8), Piece::B_ROOK);
        assert_eq!(
            pos.piece_on(Square::from_algebraic("e2").unwrap()),
            Piece::W_PAWN
        );
        assert_eq!(
            pos.piece_on(Square::from_algebraic("d7").unwrap()),
            Piece::B_PAWN
        );
        assert!(pos.piece_on(Square::from_algebraic("e4").unwrap()).is_empty());
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling(), CastlingRights::ALL);
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 1);
        assert_eq!(pos.king_square(Color::White), Some(Square::E1));
        assert_eq!(pos.king_square(Color::Black), Some(Square::E8));
    }

    #[test]
    fn test_fen_roundtrip() {
        for fen in [
            START_FEN,
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "4k3/8/8/8/8/8/8/4K3 b - - 42 99",
        ] {
            let pos = Position::from_fen(fen).unwrap();
            assert_eq!(pos.to_fen(), fen);
        }
    }

    #[test]
    fn test_fen_without_kings_is_accepted() {
        // 駒の動きの単体テストはキングのない断片局面を使う
        let pos = Position::from_fen("8/8/8/8/3R4/8/8/8 w - - 0 1").unwrap();
        assert_eq!(
            pos.piece_on(Square::from_algebraic("d4").unwrap()),
            Piece::W_ROOK
        );
        assert_eq!(pos.king_square(Color::White), None);
        assert_eq!(pos.king_square(Color::Black), None);
    }

    #[test]
    fn test_fen_errors() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - -").unwrap_err(),
            FenError::FieldCount(4)
        );
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8 w - - 0 1").unwrap_err(),
            FenError::RankCount(7)
        );
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
            Err(FenError::InvalidPiece('x'))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/9 w - - 0 1"),
            Err(FenError::RankWidth(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(FenError::InvalidSideToMove(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w KX - 0 1"),
            Err(FenError::InvalidCastling(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - e9 0 1"),
            Err(FenError::InvalidEnPassant(_))
        ));
        assert!(matches!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - - x 1"),
            Err(FenError::InvalidCounter(_))
        ));
    }
}
