use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::cozy::ChessPosition;
use crate::board::{Outcome, Rules};
use crate::search::alphabeta::{SearchConfig, SearchEngine};
use crate::search::eval::ClassicEval;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub threads: usize,
    pub search: SearchConfig,
    pub seed: u64,
    pub random_plies: usize,      // uniformly random opening moves before the engine plays
    pub start_fen: Option<String>, // defaults to the standard start position
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 200, threads: 1, search: SearchConfig::default(), seed: 42, random_plies: 0, start_fen: None }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub start_fen: String,
    pub moves: Vec<String>,
    pub result: i8, // 1 white win, 0 draw or unfinished, -1 black win
    pub finished: bool,
    pub final_fen: String,
    pub nodes: u64,
}

pub fn result_code(outcome: Outcome) -> i8 {
    match outcome {
        Outcome::MaximizingWins => 1,
        Outcome::MinimizingWins => -1,
        Outcome::Draw => 0,
    }
}

/// Plays one game, engine against itself. Each game owns its engine.
pub fn play_game(params: &SelfPlayParams, game_index: usize) -> Result<GameRecord> {
    let mut pos = match params.start_fen.as_deref() {
        Some(fen) => ChessPosition::from_fen(fen)?,
        None => ChessPosition::startpos(),
    };
    let mut engine = SearchEngine::new(params.search, ClassicEval::default())?;
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (game_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let mut record = GameRecord { start_fen: pos.fen(), moves: Vec::new(), result: 0, finished: false, final_fen: String::new(), nodes: 0 };
    loop {
        if let Some(outcome) = pos.outcome() {
            record.finished = true;
            record.result = result_code(outcome);
            break;
        }
        if record.moves.len() >= params.max_plies { break; }
        let mv = if record.moves.len() < params.random_plies {
            pos.legal_moves().choose(&mut rng).copied()
        } else {
            let res = engine.search(&mut pos);
            record.nodes += res.nodes;
            res.best_move
        };
        let Some(mv) = mv else { break };
        record.moves.push(pos.uci(mv));
        pos.apply(mv);
    }
    record.final_fen = pos.fen();
    log::debug!("game {} done: {} plies, result {}, finished {}", game_index, record.moves.len(), record.result, record.finished);
    Ok(record)
}

/// Plays `params.games` games on a pool of `params.threads` workers.
/// `on_game` runs as each game completes; results come back in game order.
pub fn generate_games<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Send + Sync,
{
    params.search.validate()?;
    let pool = rayon::ThreadPoolBuilder::new().num_threads(params.threads.max(1)).build()?;
    let games = pool.install(|| {
        (0..params.games)
            .into_par_iter()
            .map(|i| {
                let g = play_game(params, i)?;
                on_game(&g);
                Ok(g)
            })
            .collect::<Result<Vec<_>>>()
    })?;
    let white = games.iter().filter(|g| g.result > 0).count();
    let black = games.iter().filter(|g| g.result < 0).count();
    log::info!("{} games: {} white wins, {} black wins, {} other", games.len(), white, black, games.len() - white - black);
    Ok(games)
}

/// One JSON object per line.
pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let rdr = BufReader::new(File::open(path).with_context(|| format!("opening {}", path.display()))?);
    let mut games = Vec::new();
    for (i, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        games.push(serde_json::from_str(&line).with_context(|| format!("{}:{}", path.display(), i + 1))?);
    }
    Ok(games)
}
