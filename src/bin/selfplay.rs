use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use minimax_engine::search::alphabeta::SearchConfig;
use minimax_engine::selfplay::{generate_games, write_jsonl, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Play the engine against itself and write games as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 3)]
    depth: u32,
    #[arg(long)]
    no_beam: bool,
    /// JSON search config; overrides --depth and --no-beam
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Random opening plies before the engine plays
    #[arg(long, default_value_t = 2)]
    random_plies: usize,
    #[arg(long)]
    fen: Option<String>,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let search = match a.config.as_deref() {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::new(a.depth, !a.no_beam),
    };
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        threads: a.threads,
        search,
        seed: a.seed,
        random_plies: a.random_plies,
        start_fen: a.fen,
    };
    log::info!("Generating {} games (depth={}, beam={}, threads={})", a.games, search.max_depth, search.beam, a.threads);

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let games = generate_games(&params, |_| pb.inc(1))?;
    pb.finish();

    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
