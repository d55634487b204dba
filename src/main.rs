//! go-minimax: solve tiny Go positions with exhaustive minimax.
//!
//! ## Usage
//!
//! - `go-minimax` - Solve the empty board
//! - `go-minimax solve B2 pass A1` - Play the given moves, then solve
//! - `go-minimax demo --seed 7 --plies 3` - Play random moves, then solve
//!
//! The board size is fixed at compile time, see [`go_minimax::constants`].

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use go_minimax::board::{Board, Vertex};
use go_minimax::constants::N;
use go_minimax::position::{GameState, Move, parse_coord, str_coord};
use go_minimax::search::Minimax;

/// go-minimax: exhaustive Go solver for tiny boards
#[derive(Parser)]
#[command(name = "go-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a sequence of moves (e.g. "B2", "pass"), then solve the position
    Solve {
        /// Moves in order, Black first
        moves: Vec<String>,
    },
    /// Play random legal moves, then solve the position
    Demo {
        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// How many random moves to play first
        #[arg(short, long, default_value_t = 2)]
        plies: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level);

    let state = match cli.command {
        Some(Commands::Solve { moves }) => replay(&moves)?,
        Some(Commands::Demo { seed, plies }) => random_position(seed, plies),
        None => GameState::new(),
    };

    solve(&state);
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn replay(moves: &[String]) -> anyhow::Result<GameState<N>> {
    let mut state = GameState::new();
    for (i, name) in moves.iter().enumerate() {
        let mv = parse_coord::<N>(name)
            .ok_or_else(|| anyhow!("not a vertex on a {N}x{N} board: {name:?}"))?;
        state
            .try_play(mv)
            .with_context(|| format!("move {} ({name})", i + 1))?;
    }
    Ok(state)
}

fn random_position(seed: Option<u64>, plies: usize) -> GameState<N> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!(seed, plies);
    let mut rng = fastrand::Rng::with_seed(seed);

    let mut state = GameState::new();
    for _ in 0..plies {
        let legal: Vec<Move> = Board::<N>::points()
            .map(Move::Place)
            .filter(|&mv| state.clone().try_play(mv).is_ok())
            .collect();

        let mv = if legal.is_empty() {
            Move::Pass
        } else {
            legal[rng.usize(..legal.len())]
        };
        info!(mv = %str_coord::<N>(mv), "random move");
        if state.try_play(mv).is_err() || state.is_finished() {
            break;
        }
    }
    state
}

fn solve(state: &GameState<N>) {
    print_position(state);

    let mut search = Minimax::new();
    let (mv, value) = search.best_move(state);
    let stats = search.stats();
    info!(
        nodes = stats.nodes,
        terminals = stats.terminals,
        cutoffs = stats.cutoffs,
        "search done"
    );

    let area = state.area_score();
    let territory = state.territory_score();
    println!("Area score:      B {} / W {}", area.black, area.white);
    println!("Territory score: B {} / W {}", territory.black, territory.white);
    println!("Minimax value:   {value} (Black stones under best play)");
    println!("Best move:       {}", str_coord::<N>(mv));
}

fn print_position(state: &GameState<N>) {
    for (row, cells) in state.board().rows().iter().enumerate() {
        let line: String = cells
            .iter()
            .map(|v| match v {
                Vertex::Black => 'X',
                Vertex::White => 'O',
                Vertex::Empty => '.',
            })
            .flat_map(|c| [c, ' '])
            .collect();
        println!("{:>2} {}", N - row, line.trim_end());
    }
    let letters: String = go_minimax::constants::COLUMN_LETTERS[..N]
        .iter()
        .flat_map(|&c| [c as char, ' '])
        .collect();
    println!("   {}", letters.trim_end());
    println!("{:?} to move", state.to_move());
}
