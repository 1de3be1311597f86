//! Dynamic-programming solver for the painter's partition problem.
//!
//! Rows of the table are "partitions used" (1..=K) and columns are
//! "prefix length" (1..=n). Row `k` depends only on row `k - 1`, so the
//! fill proceeds one row at a time, much like stepping a frontier from
//! layer to layer:
//!
//! - `dp[1][j] = sum(0, j - 1)`
//! - `dp[k][1] = sequence[0]`
//! - `dp[k][j] = min_{p in 1..=j} max(dp[k-1][p], sum(p, j - 1))`
//!
//! Range sums come from [`PrefixSums`], giving O(k·n²) time and O(k·n)
//! space. A split table of the same shape records the chosen `p` so one
//! optimal partitioning can be walked back from `(K, n)`.

use std::ops::Range;

use crate::error::{validate, PartitionError};
use crate::prefix::PrefixSums;
use crate::table::DpTable;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a solve: the optimal value and one partitioning achieving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partitioning {
    /// Minimum over all splits of the largest partition sum.
    pub max_sum: u64,
    /// Exactly `k` contiguous, non-empty, ordered ranges covering `0..n`.
    pub ranges: Vec<Range<usize>>,
    /// Sum of each range, parallel to `ranges`.
    pub sums: Vec<u64>,
}

impl Partitioning {
    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if there are no partitions.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// A validated painter's partition instance.
///
/// ```
/// use painter_partition::PartitionSolver;
///
/// let boards = [10, 20, 30, 40];
/// let solver = PartitionSolver::new(&boards, 2).unwrap();
/// let result = solver.run();
/// assert_eq!(result.max_sum, 60);
/// assert_eq!(result.ranges, vec![0..3, 3..4]);
/// assert_eq!(result.sums, vec![60, 40]);
/// ```
#[derive(Debug, Clone)]
pub struct PartitionSolver<'a> {
    sequence: &'a [u64],
    k: usize,
    prefix: PrefixSums,
}

struct Tables {
    values: DpTable<u64>,
    /// Only allocated when a partitioning will be reconstructed.
    splits: Option<DpTable<usize>>,
}

impl<'a> PartitionSolver<'a> {
    /// Validate the instance and precompute prefix sums.
    ///
    /// Fails if `sequence` is empty, if `k` is outside `1..=sequence.len()`,
    /// or if the sequence total overflows `u64`.
    pub fn new(sequence: &'a [u64], k: usize) -> Result<Self, PartitionError> {
        validate(sequence, k)?;
        let prefix = PrefixSums::new(sequence)?;
        Ok(Self {
            sequence,
            k,
            prefix,
        })
    }

    /// The sequence being partitioned.
    pub fn sequence(&self) -> &'a [u64] {
        self.sequence
    }

    /// Requested partition count `K`.
    pub fn partitions(&self) -> usize {
        self.k
    }

    /// Prefix sums over [`Self::sequence`].
    pub fn prefix_sums(&self) -> &PrefixSums {
        &self.prefix
    }

    /// Compute only the optimal value `dp[K][n]`, without a split table.
    pub fn min_max_sum(&self) -> u64 {
        let tables = self.fill_tables(false);
        tables.values.get(self.k, self.sequence.len())
    }

    /// Compute the optimal value and reconstruct one optimal partitioning.
    pub fn run(&self) -> Partitioning {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("partition_run", n = self.sequence.len(), k = self.k);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let tables = self.fill_tables(true);
        let max_sum = tables.values.get(self.k, self.sequence.len());
        let ranges = match &tables.splits {
            Some(splits) => self.reconstruct(splits),
            None => vec![0..self.sequence.len()],
        };
        let sums = ranges
            .iter()
            .map(|r| self.prefix.span_sum(r.start, r.end))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(max_sum, partitions = ranges.len(), "partitioning reconstructed");

        Partitioning {
            max_sum,
            ranges,
            sums,
        }
    }

    fn fill_tables(&self, track_splits: bool) -> Tables {
        let n = self.sequence.len();
        let k = self.k;
        let mut values = DpTable::new(k + 1, n + 1, 0u64);
        let mut splits = track_splits.then(|| DpTable::new(k + 1, n + 1, 0usize));

        // Single partition: prefix totals.
        for j in 1..=n {
            values.set(1, j, self.prefix.range_sum(0, j - 1));
        }

        for row in 2..=k {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_row", row);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let (prev, cur) = values.prev_and_row_mut(row);
            let split_row = splits.as_mut().map(|s| s.row_mut(row));
            fill_row(&self.prefix, prev, cur, split_row);
            // One element is always its own partition.
            cur[1] = self.sequence[0];
        }

        Tables { values, splits }
    }

    /// Walk the split table back from `(K, n)`.
    ///
    /// A split at `p == j` denotes an empty trailing partition; those are
    /// dropped and the result is padded back to `K` ranges by peeling the
    /// last element off a multi-element range. Values are non-negative, so
    /// peeling never raises the maximum.
    fn reconstruct(&self, splits: &DpTable<usize>) -> Vec<Range<usize>> {
        let mut ranges = Vec::with_capacity(self.k);
        let mut end = self.sequence.len();
        let mut row = self.k;
        while row > 1 && end > 1 {
            let p = splits.get(row, end);
            if p < end {
                ranges.push(p..end);
            }
            end = p;
            row -= 1;
        }
        ranges.push(0..end);
        ranges.reverse();

        while ranges.len() < self.k {
            let Some(idx) = ranges.iter().rposition(|r| r.len() > 1) else {
                break;
            };
            let r = ranges[idx].clone();
            ranges[idx] = r.start..r.end - 1;
            ranges.insert(idx + 1, r.end - 1..r.end);
        }
        ranges
    }
}

/// Best split for column `j` given the previous row; smallest `p` on ties.
#[inline]
fn best_split(prefix: &PrefixSums, prev: &[u64], j: usize) -> (u64, usize) {
    let mut best = u64::MAX;
    let mut arg = 1;
    for (p, &left) in prev.iter().enumerate().take(j + 1).skip(1) {
        let cand = left.max(prefix.range_sum(p, j - 1));
        if cand < best {
            best = cand;
            arg = p;
        }
    }
    (best, arg)
}

#[cfg(not(feature = "parallel"))]
fn fill_row(prefix: &PrefixSums, prev: &[u64], cur: &mut [u64], split_row: Option<&mut [usize]>) {
    match split_row {
        Some(split_row) => {
            for (j, (cell, split)) in cur.iter_mut().zip(split_row.iter_mut()).enumerate().skip(2) {
                let (value, p) = best_split(prefix, prev, j);
                *cell = value;
                *split = p;
            }
        }
        None => {
            for (j, cell) in cur.iter_mut().enumerate().skip(2) {
                *cell = best_split(prefix, prev, j).0;
            }
        }
    }
}

#[cfg(feature = "parallel")]
fn fill_row(prefix: &PrefixSums, prev: &[u64], cur: &mut [u64], split_row: Option<&mut [usize]>) {
    match split_row {
        Some(split_row) => cur
            .par_iter_mut()
            .zip(split_row.par_iter_mut())
            .enumerate()
            .skip(2)
            .for_each(|(j, (cell, split))| {
                let (value, p) = best_split(prefix, prev, j);
                *cell = value;
                *split = p;
            }),
        None => cur
            .par_iter_mut()
            .enumerate()
            .skip(2)
            .for_each(|(j, cell)| *cell = best_split(prefix, prev, j).0),
    }
}

/// Minimum possible largest-partition sum when splitting `sequence` into
/// exactly `k` contiguous, non-empty partitions.
///
/// ```
/// assert_eq!(painter_partition::solve(&[40, 20, 30, 40], 2), Ok(90));
/// ```
pub fn solve(sequence: &[u64], k: usize) -> Result<u64, PartitionError> {
    Ok(PartitionSolver::new(sequence, k)?.min_max_sum())
}
