use minimax_engine::{ChessPosition, ClassicEval, Evaluator, MAX_VALUE, MIN_VALUE};

fn eval_fen(fen: &str) -> f64 {
    let pos = ChessPosition::from_fen(fen).expect("valid fen");
    ClassicEval::default().evaluate(&pos)
}

#[test]
fn startpos_is_balanced() {
    let v = ClassicEval::default().evaluate(&ChessPosition::startpos());
    assert_eq!(v, 0.0);
}

#[test]
fn white_mate_scores_max() {
    // Qxf7#
    assert_eq!(eval_fen("r1bqkbnr/ppp2Qpp/2np4/4p3/2B5/4P3/PPPP1PPP/RNB1K1NR b KQkq - 0 4"), MAX_VALUE);
}

#[test]
fn black_mate_scores_min() {
    // Qxf2#
    assert_eq!(eval_fen("rnb1k1nr/pppp1ppp/4p3/2b5/4P3/PP6/2PP1qPP/RNBQKBNR w KQkq - 0 5"), MIN_VALUE);
}

#[test]
fn stalemate_and_bare_kings_score_zero() {
    assert_eq!(eval_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), 0.0);
    assert_eq!(eval_fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1"), 0.0);
}

#[test]
fn extra_queen_dominates() {
    let v = eval_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    assert!(v > 8.0 && v < 20.0, "eval {v}");
    let w = eval_fen("3qk3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert!(w < -8.0 && w > -20.0, "eval {w}");
}

#[test]
fn center_and_mobility_after_e4() {
    let mut pos = ChessPosition::startpos();
    pos.play_uci("e2e4").unwrap();
    let eval = ClassicEval::default();
    // e4 eyes d5; White would have 30 moves to Black's 20
    assert!((eval.center_control(pos.board()) - 0.05).abs() < 1e-9);
    assert!((eval.mobility(pos.board()) - 1.0).abs() < 1e-9);
    assert!((eval.evaluate(&pos) - 1.05).abs() < 1e-9);
}

#[test]
fn mobility_with_side_to_move_in_check_still_counts_the_checker() {
    // Black king in check from the rook; no null move exists.
    // Re1: e2..e8 and d1..a1 = 11, Kf1: e2 f2 g2 g1 = 4
    let pos = ChessPosition::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();
    let eval = ClassicEval::default();
    let black = pos.legal_moves_count() as f64;
    assert_eq!(black, 4.0);
    assert!((eval.mobility(pos.board()) - 0.1 * (15.0 - black)).abs() < 1e-9);
}

#[test]
fn mobility_in_check_counts_pawn_pushes_and_promotions() {
    // White in check from Bd4. Black: e2-e1 promotes (4), b7 pushes (2),
    // the bishop's 12 squares including a1, Kh8 g8 g7 h7 (3)
    let pos = ChessPosition::from_fen("7k/1p6/8/8/3b4/8/4p3/K7 w - - 0 1").unwrap();
    let eval = ClassicEval::default();
    let white = pos.legal_moves_count() as f64;
    assert!((eval.mobility(pos.board()) - 0.1 * (white - 21.0)).abs() < 1e-9);
}

#[test]
fn evaluate_leaves_position_unchanged() {
    let mut pos = ChessPosition::startpos();
    pos.play_uci("d2d4").unwrap();
    let before = pos.fen();
    let _ = ClassicEval::default().evaluate(&pos);
    assert_eq!(pos.fen(), before);
    assert_eq!(pos.moves_played(), 1);
}
