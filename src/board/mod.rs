//! Rules collaborator seam.
//!
//! The search never owns a position: it borrows one through [`Rules`] and
//! must hand it back unchanged. Every `apply` is paired with exactly one
//! `undo`; [`Applied`] ties the `undo` to scope exit so early returns and
//! pruning breaks cannot leak a move.

pub mod cozy;

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

/// Which role the side to move plays. In chess White maximizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Maximizing,
    Minimizing,
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    MaximizingWins,
    MinimizingWins,
    Draw,
}

/// Position state plus legality, as consumed by the search.
pub trait Rules {
    type Move: Clone + PartialEq + Debug;

    /// Legal moves in a deterministic order. Empty only on terminal positions.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn apply(&mut self, mv: Self::Move);

    /// Reverts the most recent `apply`.
    fn undo(&mut self);

    /// `Some` once the game is over.
    fn outcome(&self) -> Option<Outcome>;

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Canonical, collision-free encoding of the full game state.
    fn position_key(&self) -> String;

    fn side_to_move(&self) -> Side;

    /// Full-move counter, starting at 1 and bumped after each minimizing move.
    fn fullmove_number(&self) -> u32;

    /// Applies `mv` for the lifetime of the returned guard.
    fn scoped(&mut self, mv: Self::Move) -> Applied<'_, Self>
    where
        Self: Sized,
    {
        Applied::new(self, mv)
    }
}

/// A move applied to a borrowed position, undone on drop.
pub struct Applied<'a, P: Rules> {
    pos: &'a mut P,
}

impl<'a, P: Rules> Applied<'a, P> {
    pub fn new(pos: &'a mut P, mv: P::Move) -> Self {
        pos.apply(mv);
        Self { pos }
    }
}

impl<P: Rules> Deref for Applied<'_, P> {
    type Target = P;
    fn deref(&self) -> &P { self.pos }
}

impl<P: Rules> DerefMut for Applied<'_, P> {
    fn deref_mut(&mut self) -> &mut P { self.pos }
}

impl<P: Rules> Drop for Applied<'_, P> {
    fn drop(&mut self) { self.pos.undo(); }
}
