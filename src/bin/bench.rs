use clap::Parser;
use minimax_engine::{ChessEngine, ChessPosition, ClassicEval, SearchConfig};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "bench", version, about = "Time one search and report nodes per second")]
struct Args {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Disable the beam cut
    #[arg(long)]
    no_beam: bool,

    /// Disable alpha-beta pruning (plain minimax)
    #[arg(long)]
    no_pruning: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut pos = if args.fen == "startpos" { ChessPosition::startpos() } else { ChessPosition::from_fen(&args.fen)? };

    let mut cfg = SearchConfig::new(args.depth, !args.no_beam);
    cfg.pruning = !args.no_pruning;
    let mut engine = ChessEngine::new(cfg, ClassicEval::default())?;

    let t0 = Instant::now();
    let res = engine.search(&mut pos);
    let dt = t0.elapsed();
    let nps = if dt.as_secs_f64() > 0.0 { res.nodes as f64 / dt.as_secs_f64() } else { 0.0 };
    let best = res.best_move.map(|m| pos.uci(m)).unwrap_or_else(|| "(none)".to_string());
    println!("bestmove={} score={:.2} nodes={} cache={} elapsed={:.3}s nps={:.1}", best, res.score, res.nodes, engine.cache_len(), dt.as_secs_f64(), nps);
    Ok(())
}
