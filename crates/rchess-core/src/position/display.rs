//! 局面のテキスト表示
//!
//! デバッグとログ出力用。8段目を上にした盤面図と、FENに含まれる
//! 付随情報を併記する。

use std::fmt;

use crate::types::{File, Rank, Square};

use super::fen::piece_to_fen;
use super::pos::Position;

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", rank.to_char())?;
            for &file in &File::ALL {
                let pc = self.piece_on(Square::new(file, rank));
                if pc.is_empty() {
                    write!(f, " .")?;
                } else {
                    write!(f, " {}", piece_to_fen(pc))?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for &file in &File::ALL {
            write!(f, " {}", file.to_char())?;
        }
        writeln!(f)?;

        let ep = match self.en_passant() {
            Some(sq) => sq.to_algebraic(),
            None => "-".to_string(),
        };
        writeln!(
            f,
            "castling: {}  en passant: {}  halfmove: {}",
            self.castling().to_fen_field(),
            ep,
            self.halfmove_clock()
        )?;
        write!(
            f,
            "move {}, {} to play",
            self.fullmove_number(),
            self.side_to_move().name()
        )
    }
}
