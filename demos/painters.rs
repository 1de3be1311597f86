//! Example: splitting boards among painters.
//!
//! Run with:
//! `cargo run --example painters`

use painter_partition::{solve_reference, PartitionSolver};

fn main() {
    // Board lengths; each painter takes a contiguous run of boards.
    let boards = vec![40, 20, 30, 40, 10, 50, 20];

    for painters in 1..=4 {
        let solver = match PartitionSolver::new(&boards, painters) {
            Ok(s) => s,
            Err(err) => {
                eprintln!("painters={painters}: {err}");
                continue;
            }
        };
        let result = solver.run();
        println!("{painters} painter(s): slowest paints {}", result.max_sum);
        for (range, sum) in result.ranges.iter().zip(&result.sums) {
            println!("  boards {:?} -> {sum}", &boards[range.clone()]);
        }
        if let Ok(check) = solve_reference(&boards, painters) {
            assert_eq!(check, result.max_sum);
        }
    }

    // Asking for more painters than boards is rejected up front.
    if let Err(err) = PartitionSolver::new(&boards, boards.len() + 1) {
        println!("rejected: {err}");
    }
}
