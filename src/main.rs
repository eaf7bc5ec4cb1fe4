use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use incrocio::candidate_list::CandidateList;
use incrocio::cell::{Direction, MAX_SECRET_INPUT_LEN};
use incrocio::errors::PuzzleError;
use incrocio::puzzle::{self, Puzzle};

/// Crossword layout generator
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Path to the candidate list file (word;clue per line)
    candidates: String,

    /// Secret word to hide across the grid's letters
    #[arg(short, long)]
    secret: Option<String>,

    /// Pin the layout RNG for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,
}

/// Entry point of the incrocio CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("INCROCIO_DEBUG").is_ok();
    incrocio::log::init_logger(debug_enabled);

    log::info!("Starting incrocio generator");

    if let Err(e) = try_main() {
        eprintln!("Error: {}", e.display_detailed());
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the incrocio CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the candidate list from disk and validate the secret word.
/// 3. Generate the puzzle (seeded if requested).
/// 4. Print the grid, clues, and solution markers on stdout.
/// 5. Print diagnostics (timings, dropped words) on stderr.
fn try_main() -> Result<(), PuzzleError> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the candidate list from disk
    let t_load = Instant::now();
    let list = CandidateList::load_from_path(&cli.candidates)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    if list.candidates.is_empty() {
        return Err(PuzzleError::NoCandidates);
    }

    // 2. Validate the secret word at the boundary; the engine would only
    //    degrade silently, but the CLI user deserves an explicit message.
    if let Some(secret) = &cli.secret {
        let len = secret.chars().count();
        if len > MAX_SECRET_INPUT_LEN {
            return Err(PuzzleError::SecretTooLong { len });
        }
    }

    // 3. Generate the puzzle
    let t_generate = Instant::now();
    let puzzle = match cli.seed {
        Some(seed) => puzzle::generate_seeded(&list.candidates, cli.secret.as_deref(), seed),
        None => puzzle::generate(&list.candidates, cli.secret.as_deref()),
    };
    let generate_secs = t_generate.elapsed().as_secs_f64();

    // 4. Print the puzzle on stdout
    print!("{}", render_grid(&puzzle));
    print!("{}", render_clues(&puzzle));

    if let Some(solution) = &puzzle.solution {
        println!("\nHidden solution: {} (as typed: {})", solution.word, solution.original);
        for cell in &solution.cells {
            println!("  letter {} '{}' at ({}, {})", cell.index + 1, cell.ch, cell.x, cell.y);
        }
    } else if cli.secret.is_some() {
        eprintln!("⚠️  The secret word could not be hidden in this grid");
    }

    if !puzzle.dropped.is_empty() {
        let dropped: Vec<&str> = puzzle.dropped.iter().map(|d| d.word.as_str()).collect();
        eprintln!("⚠️  Not placed: {}", dropped.join(", "));
    }

    // 5. Print diagnostics (candidate count, timings) to stderr
    eprintln!(
        "Loaded {} candidates in {:.3}s; generated {}x{} grid with {} words in {:.3}s.",
        list.candidates.len(),
        load_secs,
        puzzle.width,
        puzzle.height,
        puzzle.words.len(),
        generate_secs
    );

    Ok(())
}

/// Render the grid as text: one character per cell, '.' for empty cells.
fn render_grid(puzzle: &Puzzle) -> String {
    let width = puzzle.width as usize;
    let height = puzzle.height as usize;
    let mut rows = vec![vec!['.'; width]; height];

    for word in &puzzle.words {
        for ((x, y), ch) in word.cells() {
            rows[y as usize][x as usize] = ch;
        }
    }

    let mut out = String::new();
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Render the numbered clue lists, ACROSS first.
fn render_clues(puzzle: &Puzzle) -> String {
    let mut out = String::new();
    for direction in [Direction::Across, Direction::Down] {
        let heading = match direction {
            Direction::Across => "\nAcross:\n",
            Direction::Down => "\nDown:\n",
        };
        out.push_str(heading);
        for word in puzzle.words.iter().filter(|w| w.direction == direction) {
            out.push_str(&format!("  {}. {} • {}\n", word.number, word.word, word.clue));
        }
    }
    out
}
