use std::fs;
use std::path::PathBuf;
use sudoku_logic::batch::{solve_directory, BatchSummary};
use sudoku_logic::{solve, Grid, Outcome};

const CLASSIC: &str = "\
53__7____
6__195___
_98____6_
8___6___3
4__8_3__1
7___2___6
_6____28_
___419__5
____8__79";

const CLASSIC_SOLUTION: &str = "\
534678912
672195348
198342567
859761423
426853791
713924856
961537284
287419635
345286179";

// no cell has a single candidate until hidden singles get involved
const HIDDEN_REQUIRED: &str = "\
___6_5713
_5___19_2
___39___5
_______2_
_____75__
_27_3____
39___6_41
__5__4__6
_7_1_3_5_";

const HIDDEN_REQUIRED_SOLUTION: &str = "\
289645713
453871962
761392485
538469127
946217538
127538694
392756841
815924376
674183259";

// singles alone stall on this one; a pointing pair has to open it up
const POINTING_REQUIRED: &str = "\
__75__961
_1___238_
6_31_____
__2___4_9
____26_7_
_7_9___2_
126____5_
7__214_93
__9_652__";

const POINTING_REQUIRED_SOLUTION: &str = "\
247538961
915642387
683197542
562871439
391426875
874953126
126389754
758214693
439765218";

// needs search, not deduction (23 givens, unique solution)
const SEARCH_ONLY: &str = "\
1____7_9_
_3__2___8
__96__5__
__53__9__
_1__8___2
6____4___
3______1_
_4______7
__7___3__";

#[test]
fn classic_puzzle_matches_published_solution() {
    let mut grid = Grid::from_lines("classic", CLASSIC).unwrap();
    assert_eq!(solve(&mut grid), Outcome::Solved);
    assert!(grid.solved());
    assert_eq!(grid.to_string(), CLASSIC_SOLUTION);
}

#[test]
fn single_missing_cell_solves_in_one_pass() {
    let text = CLASSIC_SOLUTION.replacen('2', "_", 1);
    let mut grid = Grid::from_lines("one-hole", &text).unwrap();
    assert_eq!(grid.empty_cells().count(), 1);

    assert_eq!(solve(&mut grid), Outcome::Solved);
    assert_eq!(grid.to_string(), CLASSIC_SOLUTION);
}

#[test]
fn hidden_singles_carry_the_puzzle() {
    let mut grid = Grid::from_lines("hidden", HIDDEN_REQUIRED).unwrap();
    assert_eq!(solve(&mut grid), Outcome::Solved);
    assert_eq!(grid.to_string(), HIDDEN_REQUIRED_SOLUTION);
}

#[test]
fn pointing_pairs_unlock_the_puzzle() {
    let mut grid = Grid::from_lines("pointing", POINTING_REQUIRED).unwrap();
    assert_eq!(solve(&mut grid), Outcome::Solved);
    assert_eq!(grid.to_string(), POINTING_REQUIRED_SOLUTION);
}

#[test]
fn search_only_puzzle_comes_back_stuck() {
    let mut grid = Grid::from_lines("search-only", SEARCH_ONLY).unwrap();
    assert_eq!(solve(&mut grid), Outcome::Stuck);
    assert!(!grid.solved());
    assert_eq!(grid.empty_cells().count(), 57);

    // a second run finds nothing new and leaves the grid untouched
    let before = grid.to_string();
    assert_eq!(solve(&mut grid), Outcome::Stuck);
    assert_eq!(grid.to_string(), before);
}

#[test]
fn solved_output_round_trips_through_the_loader() {
    let mut grid = Grid::from_lines("classic", CLASSIC).unwrap();
    assert_eq!(solve(&mut grid), Outcome::Solved);

    let mut reloaded = Grid::from_lines("classic-reloaded", &grid.to_string()).unwrap();
    assert_eq!(solve(&mut reloaded), Outcome::Solved);
    assert_eq!(reloaded.to_string(), grid.to_string());
}

#[test]
fn duplicate_givens_surface_as_stuck() {
    // complete grid with one given corrupted into a row duplicate
    let text = CLASSIC_SOLUTION.replacen('3', "5", 1);
    let mut grid = Grid::from_lines("corrupt", &text).unwrap();
    assert_eq!(solve(&mut grid), Outcome::Stuck);
    assert!(!grid.solved());
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sudoku-logic-{}-{tag}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn batch_run_writes_solution_files() {
    let puzzles = scratch_dir("puzzles");
    let solutions = scratch_dir("solutions");
    fs::write(puzzles.join("classic.txt"), format!("{CLASSIC}\n")).unwrap();
    fs::write(puzzles.join("search_only.txt"), format!("{SEARCH_ONLY}\n")).unwrap();
    fs::write(puzzles.join("stale.sln.txt"), "not a puzzle").unwrap();
    fs::write(puzzles.join("broken.txt"), "too short").unwrap();

    let summary = solve_directory(&puzzles, &solutions).unwrap();
    assert_eq!(
        summary,
        BatchSummary {
            solved: 1,
            stuck: 1,
            failed: 1,
        }
    );

    let written = fs::read_to_string(solutions.join("classic.sln.txt")).unwrap();
    assert_eq!(written, format!("{CLASSIC_SOLUTION}\n"));
    // stuck puzzles are written out partially filled
    let partial = fs::read_to_string(solutions.join("search_only.sln.txt")).unwrap();
    assert!(partial.contains('_'));
    assert!(!solutions.join("stale.sln.sln.txt").exists());

    let _ = fs::remove_dir_all(&puzzles);
    let _ = fs::remove_dir_all(&solutions);
}
