//! Error types for the rank-reduction matcher.
//!
//! Every failure is detected synchronously and returned to the caller
//! immediately. There is no partial result: a run either produces a
//! complete, capacity-respecting assignment or one of these errors.

use thiserror::Error;

/// Why a single preference row was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedRow {
    /// The row does not rank every doctor exactly once
    #[error("row ranks {found} doctors, expected {expected}")]
    Length { expected: usize, found: usize },

    /// A rank lies outside `1..=doctors`
    #[error("rank {rank} is outside 1..={doctors}")]
    OutOfRange { rank: u32, doctors: usize },

    /// The same rank was given to two doctors
    #[error("rank {rank} appears more than once")]
    Duplicate { rank: u32 },
}

/// Errors returned by [`crate::AssignmentEngine::assign`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A patient's row is not a permutation of `1..=doctors`
    #[error("malformed preferences for patient {patient}: {reason}")]
    MalformedPreference { patient: usize, reason: MalformedRow },

    /// `capacity * doctors < patients`
    #[error("capacity {capacity} across {doctors} doctors cannot seat {patients} patients")]
    InfeasibleCapacity {
        capacity: usize,
        doctors: usize,
        patients: usize,
    },

    /// The round cap was reached before every patient was assigned
    #[error("no convergence after {rounds} rounds ({assigned} of {patients} patients assigned)")]
    Nontermination {
        rounds: usize,
        assigned: usize,
        patients: usize,
    },

    /// A placement or receipt could not be SSZ-encoded
    #[error("failed to encode match record: {0}")]
    Encoding(String),
}

impl MatchError {
    /// True for errors caused by the input rather than by the run itself
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            MatchError::MalformedPreference { .. } | MatchError::InfeasibleCapacity { .. }
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
