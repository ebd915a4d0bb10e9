use minimax_engine::perft::perft;
use minimax_engine::ChessPosition;

#[test]
fn perft_startpos_small_depths() {
    let mut pos = ChessPosition::startpos();
    assert_eq!(perft(&mut pos, 1), 20);
    assert_eq!(perft(&mut pos, 2), 400);
    assert_eq!(perft(&mut pos, 3), 8902);
    assert_eq!(pos.moves_played(), 0);
}

#[test]
fn perft_kiwipete() {
    let mut pos = ChessPosition::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    let before = pos.fen();
    assert_eq!(perft(&mut pos, 1), 48);
    assert_eq!(perft(&mut pos, 2), 2039);
    assert_eq!(pos.fen(), before);
}
