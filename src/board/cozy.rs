use cozy_chess::{BitBoard, Board, Color, File, Move, Piece, Square};
use std::fmt;

use crate::board::{Outcome, Rules, Side};
use crate::error::PositionError;

// Draws the game ends on without any claim.
const SEVENTY_FIVE_MOVE_PLIES: u16 = 150;
const FIVEFOLD: usize = 5;
// b1, d1, ... h8: squares where file + rank is odd
const LIGHT_SQUARES: BitBoard = BitBoard(0x55AA_55AA_55AA_55AA);

/// Chess position with exact undo.
///
/// `apply` pushes the current board and plays on a copy, so `undo` restores
/// the previous board bit-for-bit. The pushed boards double as the game
/// history for repetition detection.
///
/// cozy-chess stops its halfmove clock at 100, so the plies since the last
/// capture or pawn move are counted here and pushed along with each board.
#[derive(Clone, Debug)]
pub struct ChessPosition {
    board: Board,
    quiet_plies: u16,
    undo: Vec<(Board, u16)>,
}

impl ChessPosition {
    pub fn startpos() -> Self { Self::from_board(Board::default()) }

    pub fn from_board(board: Board) -> Self {
        let quiet_plies = board.halfmove_clock() as u16;
        Self { board, quiet_plies, undo: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        Board::from_fen(fen, false)
            .map(Self::from_board)
            .map_err(|e| PositionError::InvalidFen { fen: fen.to_string(), reason: format!("{e:?}") })
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    /// Plies applied since this position was created.
    pub fn moves_played(&self) -> usize { self.undo.len() }

    pub fn legal_moves_count(&self) -> usize {
        let mut ct = 0usize;
        self.board.generate_moves(|moves| { ct += moves.len(); false });
        ct
    }

    /// Finds the legal move written as `text` (standard or king-takes-rook castling).
    pub fn parse_uci(&self, text: &str) -> Result<Move, PositionError> {
        let mut found = None;
        self.board.generate_moves(|moves| {
            for m in moves {
                if move_to_uci(&self.board, m) == text || format!("{}", m) == text { found = Some(m); break; }
            }
            found.is_some()
        });
        found.ok_or_else(|| PositionError::IllegalMove(text.to_string()))
    }

    pub fn play_uci(&mut self, text: &str) -> Result<Move, PositionError> {
        let mv = self.parse_uci(text)?;
        self.apply(mv);
        Ok(mv)
    }

    pub fn uci(&self, mv: Move) -> String { move_to_uci(&self.board, mv) }

    /// Plies since the last capture or pawn move, not capped at 100.
    pub fn quiet_plies(&self) -> u16 { self.quiet_plies }

    /// Neither side can mate: a lone minor piece, or bishops only, all on
    /// one square colour.
    fn insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() { return false; }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if (knights | bishops).len() <= 1 { return true; }
        knights.is_empty() && ((bishops & !LIGHT_SQUARES).is_empty() || (bishops & LIGHT_SQUARES).is_empty())
    }

    fn repetitions(&self) -> usize {
        let window = self.quiet_plies as usize;
        let key = self.board.hash();
        1 + self.undo.iter().rev().take(window).filter(|(b, _)| b.hash() == key).count()
    }
}

impl Default for ChessPosition {
    fn default() -> Self { Self::startpos() }
}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.board) }
}

impl Rules for ChessPosition {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    fn apply(&mut self, mv: Move) {
        let prev = (self.board.clone(), self.quiet_plies);
        self.board.play(mv);
        self.quiet_plies = if self.board.halfmove_clock() == 0 { 0 } else { prev.1.saturating_add(1) };
        self.undo.push(prev);
    }

    fn undo(&mut self) {
        let (board, quiet_plies) = self.undo.pop().expect("undo without a matching apply");
        self.board = board;
        self.quiet_plies = quiet_plies;
    }

    fn outcome(&self) -> Option<Outcome> {
        let mut has_move = false;
        self.board.generate_moves(|ml| { has_move = !ml.is_empty(); has_move });
        if !has_move {
            if self.board.checkers().is_empty() { return Some(Outcome::Draw); }
            // side to move is mated
            return Some(match self.board.side_to_move() {
                Color::White => Outcome::MinimizingWins,
                Color::Black => Outcome::MaximizingWins,
            });
        }
        if self.quiet_plies >= SEVENTY_FIVE_MOVE_PLIES || self.insufficient_material() || self.repetitions() >= FIVEFOLD {
            return Some(Outcome::Draw);
        }
        None
    }

    fn position_key(&self) -> String { self.fen() }

    fn side_to_move(&self) -> Side { side_of(self.board.side_to_move()) }

    fn fullmove_number(&self) -> u32 { self.board.fullmove_number() as u32 }
}

pub fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::Maximizing,
        Color::Black => Side::Minimizing,
    }
}

/// UCI text for `mv`, with castling written as the king's two-square step.
pub fn move_to_uci(board: &Board, mv: Move) -> String {
    let mut mv = mv;
    let castles = board.piece_on(mv.from) == Some(Piece::King) && board.colors(board.side_to_move()).has(mv.to);
    if castles {
        let file = if (mv.to.file() as usize) > (mv.from.file() as usize) { File::G } else { File::C };
        mv.to = Square::new(file, mv.from.rank());
    }
    format!("{}", mv)
}
