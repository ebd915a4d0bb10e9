#![allow(dead_code)]
use minimax_engine::{Evaluator, Outcome, Rules, Score, Side};

/// Synthetic game tree: `branching[d]` moves at ply `d`, leaves below the last.
/// Leaves are terminal; the root maximizes.
#[derive(Clone, Debug)]
pub struct TreeGame {
    pub branching: Vec<usize>,
    pub path: Vec<usize>,
}

impl TreeGame {
    pub fn new(branching: &[usize]) -> Self { Self { branching: branching.to_vec(), path: Vec::new() } }
    pub fn height(&self) -> usize { self.branching.len() }
}

impl Rules for TreeGame {
    type Move = usize;
    fn legal_moves(&self) -> Vec<usize> {
        match self.branching.get(self.path.len()) { Some(&n) => (0..n).collect(), None => Vec::new() }
    }
    fn apply(&mut self, mv: usize) { self.path.push(mv); }
    fn undo(&mut self) { self.path.pop(); }
    fn outcome(&self) -> Option<Outcome> { if self.path.len() >= self.branching.len() { Some(Outcome::Draw) } else { None } }
    fn position_key(&self) -> String { format!("{:?}", self.path) }
    fn side_to_move(&self) -> Side { if self.path.len() % 2 == 0 { Side::Maximizing } else { Side::Minimizing } }
    fn fullmove_number(&self) -> u32 { 1 + self.path.len() as u32 / 2 }
}

fn mix(path: &[usize]) -> u64 {
    let mut h = 0xcbf2_9ce4_8422_2325u64;
    for &p in path {
        h ^= p as u64 + 1;
        h = h.wrapping_mul(0x0100_0000_01b3);
        h ^= h >> 29;
    }
    h
}

/// Pseudo-random integral values in [-50, 50] keyed by path.
pub struct HashEval;
impl Evaluator<TreeGame> for HashEval {
    fn evaluate(&self, pos: &TreeGame) -> Score { (mix(&pos.path) % 101) as Score - 50.0 }
}

/// Fixed value for every position.
pub struct ConstEval(pub Score);
impl Evaluator<TreeGame> for ConstEval {
    fn evaluate(&self, _pos: &TreeGame) -> Score { self.0 }
}

/// Explicit leaf table; an interior node scores as its lowest leaf.
pub struct TableEval(pub Vec<(Vec<usize>, Score)>);
impl Evaluator<TreeGame> for TableEval {
    fn evaluate(&self, pos: &TreeGame) -> Score {
        self.0.iter().filter(|(p, _)| p.starts_with(&pos.path)).map(|(_, v)| *v).fold(f64::INFINITY, f64::min)
    }
}

/// Exhaustive minimax to `depth` plies, no pruning and no ordering.
pub fn minimax<E: Evaluator<TreeGame>>(pos: &mut TreeGame, eval: &E, depth: u32, max_depth: u32) -> Score {
    if depth >= max_depth || pos.is_terminal() { return eval.evaluate(pos); }
    let maximizing = pos.side_to_move() == Side::Maximizing;
    let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
    for mv in pos.legal_moves() {
        pos.apply(mv);
        let v = minimax(pos, eval, depth + 1, max_depth);
        pos.undo();
        best = if maximizing { best.max(v) } else { best.min(v) };
    }
    best
}
