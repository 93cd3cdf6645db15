//! make_move / unmake_move の復元テスト
//!
//! どんな指し手も、適用して巻き戻せば局面（盤面・手番・キャスリング権・
//! アンパッサン升・各カウンタ）が完全に元へ戻ることを確認する。

use rchess_core::{generate_all, Color, Move, MoveFlag, Piece, Position, Square};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// 適用 → 巻き戻しでFENが一致することを確認
fn assert_roundtrip(fen: &str) {
    let mut pos = Position::from_fen(fen).unwrap();
    let moves = generate_all(&pos);
    assert!(!moves.is_empty(), "no moves in {fen}");
    for &m in &moves {
        pos.make_move(m);
        pos.unmake_move(m);
        assert_eq!(pos.to_fen(), fen, "move {m} did not restore");
    }
}

#[test]
fn test_unmake_restores_startpos() {
    assert_roundtrip("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
}

#[test]
fn test_unmake_restores_complex_position() {
    // キャスリング・アンパッサン・成り・駒取りをすべて含む局面
    assert_roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    assert_roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b KQkq - 0 1");
    assert_roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    assert_roundtrip("rnbqkbnr/ppp1pppp/8/8/2pP4/8/PP2PPPP/RNBQKBNR b KQkq d3 0 2");
}

#[test]
fn test_capture_is_restored() {
    let fen = "4k3/8/8/3p4/4P3/8/8/4K3 w - - 3 7";
    let mut pos = Position::from_fen(fen).unwrap();
    let m = Move::new(sq("e4"), sq("d5"), Piece::B_PAWN);
    assert!(pos.make_move(m));
    assert!(pos.piece_on(sq("e4")).is_empty());
    assert_eq!(pos.piece_on(sq("d5")), Piece::W_PAWN);
    // 駒取りで50手カウンタがリセットされる
    assert_eq!(pos.halfmove_clock(), 0);

    pos.unmake_move(m);
    assert_eq!(pos.to_fen(), fen);
    assert_eq!(pos.halfmove_clock(), 3);
}

#[test]
fn test_nested_make_unmake() {
    // スタックを3段積んでから逆順に戻す
    let mut pos = Position::startpos();
    let fen0 = pos.to_fen();

    let m1 = Move::with_flag(sq("e2"), sq("e4"), Piece::EMPTY, MoveFlag::DoublePush);
    let m2 = Move::with_flag(sq("c7"), sq("c5"), Piece::EMPTY, MoveFlag::DoublePush);
    let m3 = Move::new(sq("g1"), sq("f3"), Piece::EMPTY);

    assert!(pos.make_move(m1));
    let fen1 = pos.to_fen();
    assert!(pos.make_move(m2));
    let fen2 = pos.to_fen();
    assert!(pos.make_move(m3));

    assert_eq!(pos.ply(), 3);
    assert_eq!(pos.last_move(), Some(m3));
    assert_eq!(pos.fullmove_number(), 2);

    pos.unmake_move(m3);
    assert_eq!(pos.to_fen(), fen2);
    pos.unmake_move(m2);
    assert_eq!(pos.to_fen(), fen1);
    pos.unmake_move(m1);
    assert_eq!(pos.to_fen(), fen0);
    assert_eq!(pos.ply(), 0);
    assert_eq!(pos.last_move(), None);
}

#[test]
fn test_illegal_move_reports_false_and_unmakes() {
    // e1のキングの前にルークの利きがあり、前へ出ると王手になる
    let fen = "4r3/8/8/8/8/8/8/4K3 w - - 0 1";
    let mut pos = Position::from_fen(fen).unwrap();
    let m = Move::new(sq("e1"), sq("e2"), Piece::EMPTY);
    assert!(!pos.make_move(m));
    pos.unmake_move(m);
    assert_eq!(pos.to_fen(), fen);
}

#[test]
fn test_pinned_piece_cannot_move_away() {
    // d2のビショップはe1のキングへのピンを外せない
    let fen = "4k3/8/8/8/8/2b5/3B4/4K3 w - - 0 1";
    let mut pos = Position::from_fen(fen).unwrap();
    let m = Move::new(sq("d2"), sq("e3"), Piece::EMPTY);
    assert!(!pos.make_move(m));
    pos.unmake_move(m);
    assert_eq!(pos.to_fen(), fen);
    // ピンしている駒を取るのは合法
    let m = Move::new(sq("d2"), sq("c3"), Piece::B_BISHOP);
    assert!(pos.make_move(m));
    pos.unmake_move(m);
    assert_eq!(pos.to_fen(), fen);
}

#[test]
fn test_fullmove_number_counts_black_moves() {
    let mut pos = Position::startpos();
    let m1 = Move::with_flag(sq("e2"), sq("e4"), Piece::EMPTY, MoveFlag::DoublePush);
    let m2 = Move::with_flag(sq("e7"), sq("e5"), Piece::EMPTY, MoveFlag::DoublePush);
    assert!(pos.make_move(m1));
    assert_eq!(pos.fullmove_number(), 1);
    assert_eq!(pos.side_to_move(), Color::Black);
    assert!(pos.make_move(m2));
    assert_eq!(pos.fullmove_number(), 2);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn test_halfmove_clock_increments_on_quiet_piece_moves() {
    let mut pos = Position::startpos();
    let m1 = Move::new(sq("g1"), sq("f3"), Piece::EMPTY);
    let m2 = Move::new(sq("b8"), sq("c6"), Piece::EMPTY);
    assert!(pos.make_move(m1));
    assert_eq!(pos.halfmove_clock(), 1);
    assert!(pos.make_move(m2));
    assert_eq!(pos.halfmove_clock(), 2);
    // ポーンの移動でリセット
    let m3 = Move::new(sq("e2"), sq("e3"), Piece::EMPTY);
    assert!(pos.make_move(m3));
    assert_eq!(pos.halfmove_clock(), 0);
}
