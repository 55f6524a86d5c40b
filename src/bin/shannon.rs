//! Shannon switching game CLI
//!
//! Plays random matches on a board file.
//!
//! ```text
//! shannon --input board.txt --player short
//! shannon --input board.txt --player cut --seed 7 --games 1000
//! ```
//!
//! Exit code 1 on error.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use shannon_switch::{
    BatchRunner, Board, GameConfig, GameEngine, GameError, RenderCadence, Role, TextRenderer,
    DEFAULT_PLY_LIMIT,
};

/// Shannon switching game simulator
#[derive(Parser)]
#[command(name = "shannon")]
#[command(version)]
#[command(about = "Simulate the Shannon switching game between SHORT and CUT")]
struct Cli {
    /// Input file which describes the graph
    #[arg(long)]
    input: PathBuf,

    /// Player which has the first turn (short or cut)
    #[arg(long)]
    player: Role,

    /// Seed for move selection
    #[arg(long)]
    seed: Option<u64>,

    /// Safety bound on plies per game
    #[arg(long, default_value_t = DEFAULT_PLY_LIMIT)]
    ply_limit: usize,

    /// Number of games (at least 1); more than one prints a summary only
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    games: usize,

    /// When to print the board (never, ply, round)
    #[arg(long, default_value = "round")]
    render: RenderCadence,

    /// Highlight normal (blue) and colored (red) edges in the board
    #[arg(long)]
    color: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "game failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GameError> {
    let board = Board::load(&cli.input)?;

    let mut config = GameConfig::new()
        .with_first_player(cli.player)
        .with_ply_limit(cli.ply_limit)
        .with_render(cli.render);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    if cli.games > 1 {
        let summary = BatchRunner::new(board, config).run(cli.games)?;
        println!("{}", summary);
        return Ok(());
    }

    println!("Welcome to Shannon switching game!");
    let graph = board.to_graph()?;
    let renderer = TextRenderer::stdout().with_color(cli.color);
    let mut engine = GameEngine::with_renderer(graph, config, renderer);
    let report = engine.run()?;

    println!("{}", report.outcome);
    if let Some(seed) = report.record.seed {
        println!("(seed {})", seed);
    }
    Ok(())
}
