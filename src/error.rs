//! Error types for partition solving.
//!
//! Every failure here is an input-validation failure: the solver either
//! rejects its arguments up front or produces an exact answer.

/// Errors returned when a partitioning request is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// The input sequence has no elements.
    #[error("invalid argument: cannot partition an empty sequence")]
    EmptySequence,

    /// The requested partition count lies outside `1..=len`.
    #[error("invalid argument: partition count {k} is outside 1..={len}")]
    PartitionCount { k: usize, len: usize },

    /// The total of the sequence does not fit in a `u64`.
    #[error("invalid argument: sequence total overflows u64")]
    SumOverflow,
}

impl PartitionError {
    /// True for failures caused by the caller's arguments.
    ///
    /// All current variants are argument errors; callers that map errors
    /// onto exit codes or status values can match on this instead of
    /// enumerating variants.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptySequence | Self::PartitionCount { .. } | Self::SumOverflow
        )
    }
}

/// Validate a `(sequence, k)` pair before any computation starts.
pub(crate) fn validate(sequence: &[u64], k: usize) -> Result<(), PartitionError> {
    if sequence.is_empty() {
        return Err(PartitionError::EmptySequence);
    }
    if k == 0 || k > sequence.len() {
        return Err(PartitionError::PartitionCount {
            k,
            len: sequence.len(),
        });
    }
    Ok(())
}
