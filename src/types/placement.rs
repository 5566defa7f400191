//! A single committed patient placement.
//!
//! ## SSZ Serialization
//!
//! Placements derive `SimpleSerialize` from ssz_rs so a finished assignment
//! has one canonical byte encoding:
//! - Basic types (u64): Direct little-endian encoding
//! - Fixed-size composites: Concatenated little-endian fields

use ssz_rs::prelude::*;

/// One patient assigned to one doctor.
///
/// ## SSZ Layout
///
/// Fixed-size container, 24 bytes (8+8+8).
///
/// ## Example
///
/// ```
/// use rank_match::types::Placement;
///
/// let placement = Placement::new(3, 1, 2);
/// assert!(!placement.is_first_choice());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct Placement {
    /// Patient index (row of the preference matrix)
    pub patient: u64,

    /// Doctor index (column of the preference matrix)
    pub doctor: u64,

    /// Rank the patient originally gave this doctor (1 = most preferred)
    pub rank: u64,
}

impl Placement {
    pub fn new(patient: usize, doctor: usize, rank: u32) -> Self {
        Self {
            patient: patient as u64,
            doctor: doctor as u64,
            rank: u64::from(rank),
        }
    }

    /// The patient got the doctor they ranked first
    #[inline]
    pub fn is_first_choice(&self) -> bool {
        self.rank == 1
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_new() {
        let placement = Placement::new(4, 2, 1);

        assert_eq!(placement.patient, 4);
        assert_eq!(placement.doctor, 2);
        assert_eq!(placement.rank, 1);
        assert!(placement.is_first_choice());
    }

    #[test]
    fn test_placement_ssz_roundtrip() {
        let placement = Placement::new(7, 3, 2);

        let serialized = ssz_rs::serialize(&placement).expect("Failed to serialize");
        let deserialized: Placement =
            ssz_rs::deserialize(&serialized).expect("Failed to deserialize");

        assert_eq!(placement, deserialized);
    }

    #[test]
    fn test_placement_ssz_size() {
        let placement = Placement::new(0, 0, 1);
        let bytes = ssz_rs::serialize(&placement).expect("Failed to serialize");

        assert_eq!(bytes.len(), 24, "Placement should serialize to 24 bytes");
        assert_eq!(&bytes[16..24], &1u64.to_le_bytes());
    }
}
