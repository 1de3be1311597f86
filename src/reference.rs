//! Brute-force reference solver.
//!
//! Enumerates every end position for the first partition and recurses on
//! the remainder with one fewer partition. The running best is local to
//! each call: branches return their value and the caller keeps the
//! minimum. Because the first partition's sum only grows as its end moves
//! right, the scan stops as soon as that sum alone reaches the best found.
//!
//! Worst-case cost is exponential in `n`; use it to cross-check
//! [`crate::solve`] on small inputs (n ≤ 12), never on real workloads.

use crate::error::{validate, PartitionError};
use crate::prefix::PrefixSums;

/// Exhaustive minimum max-partition-sum. Same contract as [`crate::solve`].
pub fn solve_reference(sequence: &[u64], k: usize) -> Result<u64, PartitionError> {
    validate(sequence, k)?;
    let prefix = PrefixSums::new(sequence)?;
    Ok(best_from(&prefix, 0, k))
}

/// Best value for splitting `start..n` into exactly `k` non-empty parts.
fn best_from(prefix: &PrefixSums, start: usize, k: usize) -> u64 {
    let n = prefix.len();
    if k == 1 {
        return prefix.span_sum(start, n);
    }
    let mut best = u64::MAX;
    // Leave at least one element for each of the remaining k - 1 parts.
    for end in start..=n - k {
        let head = prefix.range_sum(start, end);
        if head >= best {
            break;
        }
        let rest = best_from(prefix, end + 1, k - 1);
        best = best.min(head.max(rest));
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_answers() {
        assert_eq!(solve_reference(&[10, 20, 30, 40], 2), Ok(60));
        assert_eq!(solve_reference(&[40, 20, 30, 40], 2), Ok(90));
        assert_eq!(solve_reference(&[5], 1), Ok(5));
        assert_eq!(solve_reference(&[1, 2, 3, 4, 5], 5), Ok(5));
        assert_eq!(solve_reference(&[1, 2, 3, 4, 5], 1), Ok(15));
    }

    #[test]
    fn zeros_do_not_confuse_pruning() {
        assert_eq!(solve_reference(&[0, 0, 0], 3), Ok(0));
        assert_eq!(solve_reference(&[0, 7, 0, 0], 2), Ok(7));
    }

    #[test]
    fn validates_like_the_dp() {
        assert_eq!(solve_reference(&[], 1), Err(PartitionError::EmptySequence));
        assert_eq!(
            solve_reference(&[1, 2], 0),
            Err(PartitionError::PartitionCount { k: 0, len: 2 })
        );
    }
}
