use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};

use eight_tiles::{solve, Board, SearchOutcome, SolverConfig, SOLVED_THRESHOLD};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play or solve the 8-tiles sliding puzzle", long_about = None)]
struct Args {
    /// Starting board as 9 digits with 0 for the blank, e.g. 245386107
    #[arg(short, long)]
    board: Option<String>,

    /// Seed for the random starting board
    #[arg(long)]
    seed: Option<u64>,

    /// Search for a solution right away instead of playing
    #[arg(short, long)]
    solve: bool,

    /// Boards with a heuristic below this value count as solved
    #[arg(long, default_value_t = SOLVED_THRESHOLD)]
    threshold: u32,
}

enum Play {
    Solved,
    Search,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = SolverConfig::with_threshold(args.threshold);

    let mut board = match (&args.board, args.seed) {
        (Some(digits), _) => Board::parse(digits.trim())
            .with_context(|| format!("invalid starting board '{}'", digits))?,
        (None, Some(seed)) => Board::random(&mut SmallRng::seed_from_u64(seed)),
        (None, None) => Board::new(None)?,
    };

    if !board.is_solvable() {
        warn!("board {} has odd parity, the goal is unreachable", board.canonical_key());
    }

    println!("{}", "Initial board is:".bold());
    display(1, &board);

    if !args.solve {
        match play(&mut board, &config)? {
            Play::Solved => {
                println!("{}", "Solved!".green());
                return Ok(());
            }
            Play::Quit => {
                println!("Exiting program...");
                return Ok(());
            }
            Play::Search => {}
        }
    }

    println!("{}", "Solving puzzle automatically...".bold());
    match solve(&board, &config)? {
        SearchOutcome::Solved { path, stats } => {
            for (i, step) in path.iter().enumerate() {
                display(i + 1, step);
            }
            println!(
                "{} in {} moves, {} boards explored.",
                "Solved".green(),
                path.len() - 1,
                stats.discovered
            );
        }
        SearchOutcome::Exhausted { best, stats } => {
            println!(
                "All {} boards have been tried.\n{}\nBest board found was:",
                stats.discovered,
                "That puzzle is impossible to solve.".red()
            );
            println!("{}Heuristic value: {}", best, best.heuristic());
        }
    }

    println!("Done.");
    Ok(())
}

/// Reads pieces to slide from stdin until the board is solved, the user asks
/// for a search with `s`, or quits with `x` or end of input.
fn play(board: &mut Board, config: &SolverConfig) -> Result<Play> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut move_number = 2;

    while !board.is_solved_within(config.solved_threshold) {
        print!("Piece to move: ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(Play::Quit),
        };

        let piece = match line.trim().chars().next() {
            Some('s') => return Ok(Play::Search),
            Some('x') => return Ok(Play::Quit),
            Some(ch) => ch.to_digit(10),
            None => continue,
        };

        match piece.filter(|&p| is_valid_move(board, p)) {
            Some(p) => {
                board.move_piece(p as u8)?;
                println!();
                display(move_number, board);
                move_number += 1;
            }
            None => println!("{}", "*** Invalid move. Please retry.".yellow()),
        }
    }

    Ok(Play::Solved)
}

fn is_valid_move(board: &Board, piece: u32) -> bool {
    board
        .possible_moves()
        .into_iter()
        .any(|index| board.piece_at(index) as u32 == piece)
}

fn display(move_number: usize, board: &Board) {
    println!("{}.\n{}Heuristic value: {}\n", move_number, board, board.heuristic());
}
