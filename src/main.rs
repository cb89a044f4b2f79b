use clap::Parser;
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_logic::batch;

/// Solve a directory of sudoku puzzles by pure logical deduction.
///
/// Each puzzle file holds 9 lines of 9 characters; '1'..'9' are givens and
/// '_', '.', '0', 'x' or 'X' mark empty cells. Results are written next to
/// the input as `<name>.sln.txt`. Puzzles that need guessing are reported
/// as stuck and written out partially filled.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the puzzle files
    #[arg(long, default_value = "puzzles")]
    puzzles: PathBuf,

    /// Directory the solutions are written to
    #[arg(long, default_value = "solutions")]
    solutions: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match batch::solve_directory(&args.puzzles, &args.solutions) {
        Ok(summary) => {
            info!(
                "batch finished: {} solved, {} stuck, {} failed",
                summary.solved, summary.stuck, summary.failed,
            );
            match summary.failed {
                0 => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            }
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
