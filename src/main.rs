use anyhow::Result;
use clap::Parser;
use cozy_chess::{Board, Color, File, Piece, Rank, Square};
use minimax_engine::{ChessEngine, ChessPosition, ClassicEval, Outcome, Rules, SearchConfig};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against the alpha-beta engine", long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = 3)]
    depth: u32,

    /// Search every move at every ply (no beam cut)
    #[arg(long)]
    no_beam: bool,

    /// JSON search config; overrides --depth and --no-beam
    #[arg(long)]
    config: Option<PathBuf>,

    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Let the engine play both sides
    #[arg(long)]
    selfplay: bool,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

fn piece_char(piece: Piece, color: Color) -> char {
    let c = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White { c.to_ascii_uppercase() } else { c }
}

fn print_board(board: &Board) {
    println!();
    for rank in (0..8).rev() {
        let mut line = format!("{} ", rank + 1);
        for file in 0..8 {
            let sq = Square::new(File::index(file), Rank::index(rank));
            let c = match (board.piece_on(sq), board.color_on(sq)) {
                (Some(p), Some(col)) => piece_char(p, col),
                _ => '.',
            };
            line.push(' ');
            line.push(c);
        }
        println!("{}", line);
    }
    println!("   a b c d e f g h");
    println!("{}", board);
}

fn read_move() -> Result<String> {
    print!("Enter your move (e.g., e2e4): ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let human = parse_color(&args.color)?;

    let config = match args.config.as_deref() {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::new(args.depth, !args.no_beam),
    };
    let mut engine = ChessEngine::new(config, ClassicEval::default())?;
    let mut pos = match args.fen.as_deref() {
        Some(fen) => ChessPosition::from_fen(fen)?,
        None => ChessPosition::startpos(),
    };
    log::info!("engine ready: {:?}", config);

    loop {
        print_board(pos.board());
        if let Some(outcome) = pos.outcome() {
            match outcome {
                Outcome::MaximizingWins => println!("\nGame over: White wins (1-0)"),
                Outcome::MinimizingWins => println!("\nGame over: Black wins (0-1)"),
                Outcome::Draw => println!("\nGame over: draw (1/2-1/2)"),
            }
            break;
        }

        if args.selfplay || pos.board().side_to_move() != human {
            let res = engine.search(&mut pos);
            let Some(mv) = res.best_move else { break };
            println!("engine plays {} (score {:.2}, {} nodes)", pos.uci(mv), res.score, res.nodes);
            pos.apply(mv);
        } else {
            let input = read_move()?;
            if input == "quit" { break; }
            if let Err(e) = pos.play_uci(&input) {
                log::warn!("rejected move {:?}", input);
                println!("{e}");
            }
        }
    }
    Ok(())
}
