use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle::heuristic::GoalPositions;
use npuzzle::report::{write_move_log, write_records, RunRecord};
use npuzzle::{
    count_inversions, random_solvable, search, Board, Heuristic, SearchResult, State, Strategy,
};

// Built-in 3x3 starting boards.
const PRESETS: [[u32; 9]; 3] = [
    [2, 7, 5, 0, 8, 4, 3, 1, 6],
    [8, 6, 7, 2, 5, 4, 0, 3, 1],
    [2, 5, 3, 1, 0, 6, 4, 7, 8],
];

#[derive(Parser)]
#[command(name = "npuzzle", about = "Solve n×n sliding-tile puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Solve one board and print the moves
    Solve(SolveArgs),
    /// Print the inversion count and whether a board can be solved
    Check {
        #[arg(long, default_value_t = 3, value_parser = board_size())]
        size: usize,
        /// Tiles in row-major order, separated by spaces or commas
        #[arg(long)]
        tiles: String,
    },
    /// Run every strategy on random solvable boards and emit JSON lines
    Bench(BenchArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Astar,
    Bfs,
    Dfs,
    Iddfs,
}

#[derive(Clone, Copy, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    Hamming,
    Euclidean,
    Chebyshev,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::Hamming => Heuristic::Hamming,
            HeuristicArg::Euclidean => Heuristic::Euclidean,
            HeuristicArg::Chebyshev => Heuristic::Chebyshev,
        }
    }
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct BoardSource {
    /// Tiles in row-major order, separated by spaces or commas
    #[arg(long)]
    tiles: Option<String>,
    /// One of the built-in 3x3 boards
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    preset: Option<u8>,
    /// Draw a random solvable board
    #[arg(long)]
    random: bool,
}

#[derive(Args)]
struct SolveArgs {
    #[arg(long, default_value_t = 3, value_parser = board_size())]
    size: usize,
    #[command(flatten)]
    source: BoardSource,
    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,
    /// Estimator used by A*
    #[arg(long, value_enum, default_value_t = HeuristicArg::Manhattan)]
    heuristic: HeuristicArg,
    /// Write the move log to this file
    #[arg(long)]
    save: Option<PathBuf>,
    /// Print only the summary, not every intermediate board
    #[arg(long)]
    quiet: bool,
}

#[derive(Args)]
struct BenchArgs {
    #[arg(long, default_value_t = 3, value_parser = board_size())]
    size: usize,
    /// Number of random boards
    #[arg(long, default_value_t = 5)]
    count: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Also run DFS, which can take very long
    #[arg(long)]
    include_dfs: bool,
    /// Write records here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Board width; a board needs at least one cell.
fn board_size() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Cmd::Solve(args) => cmd_solve(args),
        Cmd::Check { size, tiles } => cmd_check(size, &tiles),
        Cmd::Bench(args) => cmd_bench(args),
    }
}

fn parse_tiles(text: &str) -> anyhow::Result<Vec<u32>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u32>()
                .with_context(|| format!("'{}' is not a tile number", part))
        })
        .collect()
}

/// Tiles padded to a common width; tiles already home are green, the blank
/// is a dim dot.
fn render(board: &Board, goals: &GoalPositions) -> String {
    let width = board.tiles().len().saturating_sub(1).to_string().len();
    let mut out = String::new();
    for (r, row) in board.rows().enumerate() {
        for (c, &tile) in row.iter().enumerate() {
            let cell = if tile == 0 {
                format!("{:>width$}", "·", width = width).dark_grey().to_string()
            } else if goals.of(tile) == (r, c) {
                format!("{:>width$}", tile, width = width).green().to_string()
            } else {
                format!("{:>width$}", tile, width = width)
            };
            out.push_str(&cell);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn initial_board(args: &SolveArgs) -> anyhow::Result<Board> {
    let source = &args.source;
    if let Some(text) = &source.tiles {
        let tiles = parse_tiles(text)?;
        return Board::new(tiles, args.size).context("Failed to build board from --tiles");
    }
    if let Some(preset) = source.preset {
        if args.size != 3 {
            bail!("presets are 3x3 boards; drop --size or set it to 3");
        }
        let tiles = PRESETS[usize::from(preset) - 1].to_vec();
        return Board::new(tiles, 3).context("Failed to build preset board");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    random_solvable(args.size, &mut rng).context("Failed to draw a random board")
}

fn cmd_solve(args: SolveArgs) -> anyhow::Result<()> {
    let board = initial_board(&args)?;
    let size = board.size();
    if !board.is_solvable() {
        bail!("this {}x{} board cannot reach the goal", size, size);
    }

    let strategy = match args.algorithm {
        Algorithm::Astar => Strategy::AStar(args.heuristic.into()),
        Algorithm::Bfs => Strategy::Bfs,
        Algorithm::Dfs => Strategy::Dfs,
        Algorithm::Iddfs => Strategy::Iddfs,
    };
    if size > 3 && matches!(strategy, Strategy::Dfs | Strategy::Iddfs | Strategy::Bfs) {
        warn!("{} on a {}x{} board may take a very long time", strategy, size, size);
    }

    let goals = GoalPositions::new(size);
    println!("{}", "Goal state:".bold());
    print!("{}", render(&Board::goal(size)?, &goals));
    println!("{}", "Initial state:".bold());
    print!("{}", render(&board, &goals));

    info!("Solving using {}. Please wait...", strategy);
    let initial = State::new(board.clone());
    let start = Instant::now();
    let result = search(strategy, &initial).context("Search failed")?;
    let elapsed = start.elapsed();

    if result.path.replay(&initial).as_ref() != Some(&result.state) {
        bail!("returned path does not lead from the initial board to the goal");
    }

    if !args.quiet {
        for (number, step) in result.path.iter().enumerate() {
            println!("\n{} {}", format!("Move {}:", number + 1).bold(), step.direction);
            print!("{}", render(step.state.board(), &goals));
        }
    }
    print_summary(strategy, elapsed.as_secs_f64(), &result);

    if let Some(path) = &args.save {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_move_log(&mut writer, &board, &result.path)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Moves have been saved to {}", path.display());
    }

    Ok(())
}

fn print_summary(strategy: Strategy, seconds: f64, result: &SearchResult) {
    println!(
        "\nPuzzle solved using {} in about {:.4} seconds.",
        strategy.to_string().bold(),
        seconds
    );
    println!("Total nodes expanded: {}", result.nodes_expanded);
    println!("Actual path moves: {}", result.path.len());
}

fn cmd_check(size: usize, text: &str) -> anyhow::Result<()> {
    let tiles = parse_tiles(text)?;
    let board = Board::new(tiles, size).context("Failed to build board from --tiles")?;

    println!("Inversions: {}", count_inversions(board.tiles()));
    if board.is_solvable() {
        println!("{}", "Solvable".green());
    } else {
        println!("{}", "Not solvable".red());
    }
    Ok(())
}

fn cmd_bench(args: BenchArgs) -> anyhow::Result<()> {
    let mut strategies: Vec<Strategy> = Heuristic::ALL.into_iter().map(Strategy::AStar).collect();
    strategies.push(Strategy::Bfs);
    if args.include_dfs {
        strategies.push(Strategy::Dfs);
    }
    strategies.push(Strategy::Iddfs);

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut records = Vec::new();

    for number in 1..=args.count {
        let board =
            random_solvable(args.size, &mut rng).context("Failed to draw a random board")?;
        info!("Running puzzle {}/{}: {:?}", number, args.count, board.tiles());
        let initial = State::new(board.clone());

        for &strategy in &strategies {
            info!("Running {}...", strategy);
            let start = Instant::now();
            match search(strategy, &initial) {
                Ok(result) => {
                    records.push(RunRecord::new(&board, strategy, start.elapsed(), &result))
                }
                Err(err) => warn!("{} gave up on puzzle {}: {}", strategy, number, err),
            }
        }
    }

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_records(&mut writer, &records)
                .and_then(|_| writer.flush())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("{} results saved to {}", records.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_records(&mut lock, &records).context("Failed to write results")?;
        }
    }
    Ok(())
}
