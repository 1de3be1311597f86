//! Painter's partition via dynamic programming.
//!
//! Given an ordered sequence of non-negative integers and a partition count
//! `k`, find the smallest possible value of the largest sum when the
//! sequence is cut into exactly `k` contiguous, non-empty partitions.
//!
//! ## Core idea
//! 1. Prefix sums make every range sum O(1).
//! 2. Row `k` of the DP table is derived from row `k - 1` alone:
//!    `dp[k][j] = min_p max(dp[k-1][p], sum(p, j - 1))`.
//! 3. A split table kept beside the values lets [`PartitionSolver::run`]
//!    return one optimal partitioning, not just the number.
//!
//! Overall cost is O(k·n²) time and O(k·n) space per call. Each call owns
//! its tables, so concurrent solves never share state.
//!
//! ## Quick start
//! ```
//! use painter_partition::{solve, PartitionSolver};
//!
//! assert_eq!(solve(&[10, 20, 30, 40], 2), Ok(60));
//!
//! let result = PartitionSolver::new(&[1, 2, 3, 4, 5], 3).unwrap().run();
//! assert_eq!(result.max_sum, 6);
//! assert_eq!(result.ranges.len(), 3);
//! ```
//!
//! ## Modules
//! - [`solver`]    : the DP solver and its [`Partitioning`] result.
//! - [`reference`] : exhaustive recursive solver for cross-checking.
//! - [`prefix`]    : prefix sums.
//! - [`table`]     : the flat 2-D arena the DP fills.
//! - [`graph`]     : BFS/DFS over adjacency lists (independent utility).
//!
//! ## Features
//! - `parallel`: fill each DP row with rayon.
//! - `tracing`: emit spans around table fill and reconstruction.
//! - `cli` (default): build the `partition` binary.

pub mod error;
pub mod graph;
pub mod prefix;
pub mod reference;
pub mod solver;
pub mod table;

pub use crate::error::PartitionError;
pub use crate::reference::solve_reference;
pub use crate::solver::{solve, PartitionSolver, Partitioning};
