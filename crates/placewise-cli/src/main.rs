//! Command-line front end for the Placewise solver.
//!
//! Thin harness code only: puzzle strings go in, grids and batch
//! statistics come out. All solving happens in `placewise-solver`.
//!
//! # Usage
//!
//! Solve one puzzle:
//!
//! ```sh
//! placewise solve "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......"
//! ```
//!
//! Solve puzzle files, one 81-character puzzle per line:
//!
//! ```sh
//! placewise batch easy50.txt top95.txt --show-if 0.05
//! ```
//!
//! Verify the board topology invariants:
//!
//! ```sh
//! placewise check
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
    time::{Duration, Instant},
};

use clap::{Parser, Subcommand};
use placewise_core::{PuzzleGrid, topology};
use placewise_solver::{Solution, solve};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a single puzzle given on the command line.
    Solve {
        /// Flattened puzzle: 81 cells in row-major order, digits 1-9
        /// with `0` or `.` for unknown cells.
        puzzle: String,
    },
    /// Solve every puzzle in the given files and report statistics.
    Batch {
        /// Puzzle files, one puzzle per line.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Display any puzzle that takes longer than this many seconds
        /// to solve. 0 disables the display.
        #[arg(long, value_name = "SECS", default_value_t = 0.0)]
        show_if: f64,
    },
    /// Self-check of the board topology invariants.
    Check,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::Solve { puzzle } => cmd_solve(&puzzle),
        Command::Batch { files, show_if } => cmd_batch(&files, show_if),
        Command::Check => cmd_check(),
    }
}

fn cmd_solve(puzzle: &str) -> ExitCode {
    let parsed: PuzzleGrid = match puzzle.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    println!("{parsed}");

    let started = Instant::now();
    let solution = solve(puzzle).expect("input was already parsed once");
    let elapsed = started.elapsed();
    log::debug!("solved={} in {elapsed:.2?}", solution.solved());

    println!("{}", solution.grid());
    if solution.solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_batch(files: &[PathBuf], show_if: f64) -> ExitCode {
    let mut status = ExitCode::SUCCESS;
    for file in files {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("{}: {err}", file.display());
                status = ExitCode::FAILURE;
                continue;
            }
        };
        batch_report(file, &content, show_if);
    }
    status
}

/// Solves every non-empty line of one file and prints a summary in the
/// shape `Solved N of M <name> puzzles (avg S secs (F Hz), max S secs).`
fn batch_report(file: &Path, content: &str, show_if: f64) {
    let name = file
        .file_stem()
        .map_or_else(|| file.display().to_string(), |stem| {
            stem.to_string_lossy().into_owned()
        });

    let mut total = 0u32;
    let mut solved = 0u32;
    let mut sum_time = Duration::ZERO;
    let mut max_time = Duration::ZERO;

    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let started = Instant::now();
        let outcome = solve(line);
        let elapsed = started.elapsed();

        total += 1;
        sum_time += elapsed;
        max_time = max_time.max(elapsed);

        match outcome {
            Ok(solution) => {
                if solution.solved() {
                    solved += 1;
                }
                log::debug!(
                    "{name} #{total}: solved={} in {elapsed:.2?}",
                    solution.solved()
                );
                if show_if > 0.0 && elapsed.as_secs_f64() > show_if {
                    show_slow_puzzle(line, &solution, elapsed);
                }
            }
            Err(err) => log::warn!("{name} #{total}: {err}"),
        }
    }

    if total == 0 {
        println!("No puzzles found in {name}.");
        return;
    }

    let secs = sum_time.as_secs_f64();
    let avg = secs / f64::from(total);
    let hz = f64::from(total) / secs;
    println!(
        "Solved {solved} of {total} {name} puzzles (avg {avg:.4} secs ({hz:.0} Hz), max {:.4} secs).",
        max_time.as_secs_f64()
    );
}

fn show_slow_puzzle(line: &str, solution: &Solution, elapsed: Duration) {
    if let Ok(parsed) = line.parse::<PuzzleGrid>() {
        println!("\n{parsed}");
    }
    println!("{}", solution.grid());
    println!("({:.2} seconds)\n", elapsed.as_secs_f64());
}

fn cmd_check() -> ExitCode {
    topology::self_check();
    println!("All tests pass.");
    ExitCode::SUCCESS
}
