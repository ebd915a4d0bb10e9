use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::{Rules, Side};
use crate::error::ConfigError;
use crate::search::cache::PositionCache;
use crate::search::eval::{Evaluator, Score, MAX_VALUE, MIN_VALUE};

pub const BEAM_WIDTH: usize = 10;
pub const BEAM_MIN_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root. Must be at least 1.
    pub max_depth: u32,
    /// Keep only the best `beam_width` ordered moves at plies `>= beam_min_depth`.
    pub beam: bool,
    pub beam_width: usize,
    pub beam_min_depth: u32,
    /// Off leaves alpha/beta at their initial extremes: plain minimax.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3, beam: true, beam_width: BEAM_WIDTH, beam_min_depth: BEAM_MIN_DEPTH, pruning: true }
    }
}

impl SearchConfig {
    pub fn new(max_depth: u32, beam: bool) -> Self { Self { max_depth, beam, ..Self::default() } }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 { return Err(ConfigError::InvalidDepth(self.max_depth)); }
        if self.beam && self.beam_width == 0 { return Err(ConfigError::ZeroBeamWidth); }
        Ok(())
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).with_context(|| format!("reading search config {}", path.display()))?;
        let cfg: SearchConfig = serde_json::from_str(&text).with_context(|| format!("parsing search config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    pub score: Score,
    /// `None` only when the root is already terminal.
    pub best_move: Option<M>,
    pub nodes: u64,
}

/// Absolute ply index shared by both sides: White's move `n` is `2n - 1`,
/// Black's is `2n`.
pub fn move_number<P: Rules>(pos: &P) -> u32 {
    let offset = if pos.side_to_move() == Side::Minimizing { 0 } else { 1 };
    (2 * pos.fullmove_number()).saturating_sub(offset)
}

/// Fixed-depth alpha-beta over a borrowed position.
///
/// One instance serves many `search` calls within a game; its cache and
/// counters are private to it. Concurrent searches need separate instances.
pub struct SearchEngine<P: Rules, E> {
    config: SearchConfig,
    eval: E,
    cache: PositionCache<P::Move>,
    nodes: u64,
    move_number: u32,
}

impl<P: Rules, E: Evaluator<P>> SearchEngine<P, E> {
    pub fn new(config: SearchConfig, eval: E) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, eval, cache: PositionCache::new(), nodes: 0, move_number: 0 })
    }

    pub fn with_depth(max_depth: u32, beam: bool, eval: E) -> Result<Self, ConfigError> {
        Self::new(SearchConfig::new(max_depth, beam), eval)
    }

    pub fn config(&self) -> &SearchConfig { &self.config }
    /// Nodes visited by the last `search`.
    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn cache(&self) -> &PositionCache<P::Move> { &self.cache }
    pub fn cache_len(&self) -> usize { self.cache.len() }

    /// Picks a move for the side to move. `pos` is unchanged on return.
    pub fn search(&mut self, pos: &mut P) -> SearchResult<P::Move> {
        self.nodes = 0;
        self.move_number = move_number(pos);
        self.cache.purge_stale(self.move_number);
        let (score, best_move) = self.explore(pos, 0, MIN_VALUE, MAX_VALUE);
        log::debug!(
            "search move={} depth={} score={} nodes={} cache={}",
            self.move_number, self.config.max_depth, score, self.nodes, self.cache.len()
        );
        SearchResult { score, best_move, nodes: self.nodes }
    }

    pub(crate) fn explore(&mut self, pos: &mut P, depth: u32, mut alpha: Score, mut beta: Score) -> (Score, Option<P::Move>) {
        self.nodes += 1;
        if depth >= self.config.max_depth || pos.is_terminal() {
            return (self.eval.evaluate(pos), None);
        }

        let moves = self.moves_for(pos, depth);
        let maximizing = pos.side_to_move() == Side::Maximizing;

        // One-ply static scores, ordering only
        let mut ordered: Vec<(Score, P::Move)> = moves
            .into_iter()
            .map(|m| {
                let child = pos.scoped(m.clone());
                (self.eval.evaluate(&*child), m)
            })
            .collect();
        if maximizing {
            ordered.sort_by(|a, b| b.0.total_cmp(&a.0));
        } else {
            ordered.sort_by(|a, b| a.0.total_cmp(&b.0));
        }
        if self.config.beam && depth >= self.config.beam_min_depth {
            ordered.truncate(self.config.beam_width);
        }

        let mut best = if maximizing { MIN_VALUE } else { MAX_VALUE };
        let mut best_move = ordered.first().map(|(_, m)| m.clone());
        for (_, m) in ordered {
            let (score, _) = {
                let mut child = pos.scoped(m.clone());
                self.explore(&mut *child, depth + 1, alpha, beta)
            };
            // Non-strict: among equal scores the later move wins.
            if maximizing {
                if score >= best { best = score; best_move = Some(m); }
                if self.config.pruning && best > alpha { alpha = best; }
            } else {
                if score <= best { best = score; best_move = Some(m); }
                if self.config.pruning && best < beta { beta = best; }
            }
            if alpha >= beta { break; }
        }
        (best, best_move)
    }

    fn moves_for(&mut self, pos: &P, depth: u32) -> Vec<P::Move> {
        let key = pos.position_key();
        if let Some(entry) = self.cache.get(&key) { return entry.moves.clone(); }
        let moves = pos.legal_moves();
        self.cache.insert(key, moves.clone(), self.move_number + depth);
        moves
    }
}
