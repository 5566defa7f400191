//! Match receipt summarizing a finished run.
//!
//! The receipt carries a SHA-256 digest over the SSZ encoding of every
//! placement, ordered by patient. Two runs over the same input produce the
//! same digest, which makes determinism cheap to check across machines.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::MatchError;
use crate::types::score;
use crate::types::Placement;

/// Summary of one completed assignment.
///
/// ## Example
///
/// ```
/// use rank_match::types::{MatchReceipt, Placement};
///
/// let placements = vec![Placement::new(0, 0, 1), Placement::new(1, 1, 2)];
/// let receipt = MatchReceipt::from_placements(&placements, 2, 1, 2).unwrap();
///
/// assert_eq!(receipt.patients, 2);
/// assert_eq!(receipt.first_choice, 1);
/// assert_eq!(receipt.digest_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of patients placed
    pub patients: u64,

    /// Number of doctors in the run
    pub doctors: u64,

    /// Per-doctor capacity
    pub capacity: u64,

    /// Rounds the driver loop executed
    pub rounds: u64,

    /// Patients placed with their first-ranked doctor
    pub first_choice: u64,

    /// Sum of the stated ranks of every placement
    pub rank_total: u64,

    /// SHA-256 over the SSZ-encoded placements (32 bytes)
    pub digest: [u8; 32],
}

impl MatchReceipt {
    /// Build a receipt from placements ordered by patient
    pub fn from_placements(
        placements: &[Placement],
        doctors: usize,
        capacity: usize,
        rounds: usize,
    ) -> Result<Self, MatchError> {
        let mut hasher = Sha256::new();
        for placement in placements {
            let bytes = ssz_rs::serialize(placement)
                .map_err(|err| MatchError::Encoding(format!("{err:?}")))?;
            hasher.update(&bytes);
        }

        let mut digest = [0u8; 32];
        digest.copy_from_slice(&hasher.finalize());

        Ok(Self {
            patients: placements.len() as u64,
            doctors: doctors as u64,
            capacity: capacity as u64,
            rounds: rounds as u64,
            first_choice: placements.iter().filter(|p| p.is_first_choice()).count() as u64,
            rank_total: placements.iter().map(|p| p.rank).sum(),
            digest,
        })
    }

    /// Get the digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest)
    }

    /// Mean stated rank of the assigned doctors
    ///
    /// Returns None if no patients were placed.
    pub fn mean_rank(&self) -> Option<Decimal> {
        score::mean_rank(self.rank_total, self.patients)
    }

    /// Share of patients placed with their first choice
    pub fn first_choice_rate(&self) -> Option<Decimal> {
        score::first_choice_rate(self.first_choice, self.patients)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patients == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
