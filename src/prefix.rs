//! Prefix sums for O(1) range-sum queries.

use crate::error::PartitionError;

/// Cumulative sums over a sequence.
///
/// `sums[i]` holds the total of the first `i` elements, so the table has
/// `len + 1` entries and `sums[0] == 0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSums {
    sums: Vec<u64>,
}

impl PrefixSums {
    /// Build prefix sums, failing if the running total overflows `u64`.
    pub fn new(sequence: &[u64]) -> Result<Self, PartitionError> {
        let mut sums = Vec::with_capacity(sequence.len() + 1);
        let mut acc = 0u64;
        sums.push(acc);
        for &x in sequence {
            acc = acc.checked_add(x).ok_or(PartitionError::SumOverflow)?;
            sums.push(acc);
        }
        Ok(Self { sums })
    }

    /// Number of elements in the underlying sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// Returns true if the underlying sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of `sequence[i..=j]`; zero when `i > j`.
    ///
    /// # Panics
    /// Panics if `j >= len` while `i <= j`.
    #[inline]
    pub fn range_sum(&self, i: usize, j: usize) -> u64 {
        if i > j {
            return 0;
        }
        self.sums[j + 1] - self.sums[i]
    }

    /// Sum of the half-open range `start..end`.
    #[inline]
    pub fn span_sum(&self, start: usize, end: usize) -> u64 {
        if start >= end {
            return 0;
        }
        self.sums[end] - self.sums[start]
    }

    /// Total of the whole sequence.
    #[inline]
    pub fn total(&self) -> u64 {
        self.sums[self.len()]
    }
}
