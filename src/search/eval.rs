use cozy_chess::{get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, BitBoard, Board, Color, Piece, Rank, Square};
use serde::{Deserialize, Serialize};

use crate::board::cozy::ChessPosition;
use crate::board::{Outcome, Rules};

/// Scores are from the maximizing side's point of view.
pub type Score = f64;

// Forced wins; exact, never produced by the heuristic terms.
pub const MAX_VALUE: Score = 10_000_000.0;
pub const MIN_VALUE: Score = -10_000_000.0;
pub const DRAW_SCORE: Score = 0.0;

/// Static evaluation of a position. Must not change the position.
pub trait Evaluator<P> {
    fn evaluate(&self, pos: &P) -> Score;
}

pub fn terminal_score(outcome: Outcome) -> Score {
    match outcome {
        Outcome::MaximizingWins => MAX_VALUE,
        Outcome::MinimizingWins => MIN_VALUE,
        Outcome::Draw => DRAW_SCORE,
    }
}

const CENTER: [[f64; 8]; 8] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

/// Material + center control + mobility, White maximizing.
///
/// The king's value only weights the material sum; kings are never captured.
/// Tables are indexed `[rank][file]` from White's side. No king safety or
/// piece-square terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassicEval {
    /// Indexed by `Piece as usize`: pawn, knight, bishop, rook, queen, king.
    pub piece_values: [f64; 6],
    pub square_mul: f64,
    pub square_values: [[f64; 8]; 8],
    pub mobility_mul: f64,
}

impl Default for ClassicEval {
    fn default() -> Self {
        Self {
            piece_values: [1.0, 3.0, 3.0, 5.0, 9.0, 500.0],
            square_mul: 0.05,
            square_values: CENTER,
            mobility_mul: 0.1,
        }
    }
}

fn sign(color: Color) -> f64 { if color == Color::White { 1.0 } else { -1.0 } }

fn attacks(board: &Board, sq: Square, piece: Piece, color: Color) -> BitBoard {
    let occ = board.occupied();
    match piece {
        Piece::Pawn => get_pawn_attacks(sq, color),
        Piece::Knight => get_knight_moves(sq),
        Piece::Bishop => get_bishop_moves(sq, occ),
        Piece::Rook => get_rook_moves(sq, occ),
        Piece::Queen => get_bishop_moves(sq, occ) | get_rook_moves(sq, occ),
        Piece::King => get_king_moves(sq),
    }
}

fn count_moves(board: &Board) -> usize {
    let mut ct = 0usize;
    board.generate_moves(|moves| { ct += moves.len(); false });
    ct
}

/// Pseudo-legal move count for `color`, whether or not it is on move.
///
/// Castling and en passant are left out. Promotions count once per piece.
fn count_pseudo_moves(board: &Board, color: Color) -> usize {
    let own = board.colors(color);
    let theirs = board.colors(!color);
    let occ = board.occupied();
    let (up, start, last) = match color {
        Color::White => (8isize, Rank::Second, Rank::Eighth),
        Color::Black => (-8isize, Rank::Seventh, Rank::First),
    };
    let step = |sq: Square| Square::index((sq as usize as isize + up) as usize);
    let weight = |to: Square| if to.rank() == last { 4 } else { 1 };
    let mut ct = 0usize;
    for sq in own {
        let Some(piece) = board.piece_on(sq) else { continue };
        if piece != Piece::Pawn {
            ct += (attacks(board, sq, piece, color) & !own).len() as usize;
            continue;
        }
        ct += (get_pawn_attacks(sq, color) & theirs).into_iter().map(weight).sum::<usize>();
        let one = step(sq);
        if occ.has(one) { continue; }
        ct += weight(one);
        if sq.rank() == start && !occ.has(step(one)) { ct += 1; }
    }
    ct
}

impl ClassicEval {
    pub fn material(&self, board: &Board) -> f64 {
        let mut val = 0.0;
        for &color in &Color::ALL {
            for &piece in &Piece::ALL {
                let n = (board.colors(color) & board.pieces(piece)).len();
                val += sign(color) * self.piece_values[piece as usize] * n as f64;
            }
        }
        val
    }

    pub fn center_control(&self, board: &Board) -> f64 {
        let mut val = 0.0;
        for from in board.occupied() {
            let (Some(piece), Some(color)) = (board.piece_on(from), board.color_on(from)) else { continue };
            for to in attacks(board, from, piece, color) {
                val += sign(color) * self.square_mul * self.square_values[to.rank() as usize][to.file() as usize];
            }
        }
        val
    }

    /// Legal move count difference, White minus Black.
    ///
    /// The side not on move is counted on a null-move copy. When the side to
    /// move is in check no such copy exists, so its moves are counted from
    /// attack sets and pawn pushes instead.
    pub fn mobility(&self, board: &Board) -> f64 {
        let own = count_moves(board) as f64;
        let other = match board.null_move() {
            Some(b) => count_moves(&b),
            None => count_pseudo_moves(board, !board.side_to_move()),
        } as f64;
        let (white, black) = if board.side_to_move() == Color::White { (own, other) } else { (other, own) };
        self.mobility_mul * (white - black)
    }
}

impl Evaluator<ChessPosition> for ClassicEval {
    fn evaluate(&self, pos: &ChessPosition) -> Score {
        if let Some(outcome) = pos.outcome() { return terminal_score(outcome); }
        let board = pos.board();
        self.material(board) + self.center_control(board) + self.mobility(board)
    }
}
