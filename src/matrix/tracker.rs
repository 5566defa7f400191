//! Zero tracker: which patients currently hold a zero in which column.
//!
//! ## Architecture
//!
//! - **Slab**: Pre-allocated storage for [`ZeroNode`]s, one per zero held
//! - **Vec<ZeroSet>**: One ordered zero list per doctor
//! - **Vec<Option<usize>>**: Patient to slab key index
//!
//! The patient index enforces that a patient holds at most one zero at a
//! time: [`ZeroTracker::record`] unlinks the old zero before linking the
//! new one, and hands the old doctor back to the caller.
//!
//! ## Example
//!
//! ```
//! use rank_match::matrix::ZeroTracker;
//!
//! let mut tracker = ZeroTracker::new(3, 2);
//! assert_eq!(tracker.record(0, 1), None);
//! assert_eq!(tracker.record(2, 1), None);
//!
//! // Patient 0 moves to doctor 0; its old zero in column 1 is released
//! assert_eq!(tracker.record(0, 0), Some(1));
//! assert_eq!(tracker.members(1).collect::<Vec<_>>(), vec![2]);
//! ```

use slab::Slab;

use crate::matrix::{ZeroNode, ZeroSet, ZeroSetIter};

/// Per-doctor zero lists for one run
#[derive(Debug, Clone)]
pub struct ZeroTracker {
    nodes: Slab<ZeroNode>,
    sets: Vec<ZeroSet>,
    holder: Vec<Option<usize>>,
}

impl ZeroTracker {
    /// Create an empty tracker sized for the given run
    pub fn new(patients: usize, doctors: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(patients),
            sets: (0..doctors).map(ZeroSet::new).collect(),
            holder: vec![None; patients],
        }
    }

    /// Number of patients in a doctor's zero list
    #[inline]
    pub fn len(&self, doctor: usize) -> usize {
        self.sets[doctor].len
    }

    /// Total number of zeros held across all doctors
    #[inline]
    pub fn total(&self) -> usize {
        self.nodes.len()
    }

    /// Doctor in whose column the patient currently holds a zero
    pub fn doctor_of(&self, patient: usize) -> Option<usize> {
        let key = self.holder[patient]?;
        self.nodes.get(key).map(|node| node.doctor)
    }

    /// Members of a doctor's zero list, earliest first
    pub fn members(&self, doctor: usize) -> ZeroSetIter<'_> {
        self.sets[doctor].iter(&self.nodes)
    }

    /// Record a new zero for `patient` in `doctor`'s column.
    ///
    /// Any zero the patient already held is removed first; its doctor is
    /// returned so the caller can invalidate the stale cell.
    pub fn record(&mut self, patient: usize, doctor: usize) -> Option<usize> {
        let previous = self.release(patient);

        let key = self.nodes.insert(ZeroNode::new(patient, doctor));
        self.sets[doctor].push_back(key, &mut self.nodes);
        self.holder[patient] = Some(key);

        previous
    }

    /// Drop the patient's zero, if any, returning the doctor it was held in
    pub fn release(&mut self, patient: usize) -> Option<usize> {
        let key = self.holder[patient].take()?;
        let doctor = self.nodes.get(key).expect("Invalid slab key").doctor;

        self.sets[doctor].remove(key, &mut self.nodes);
        self.nodes.remove(key);
        Some(doctor)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_new() {
        let tracker = ZeroTracker::new(4, 3);

        assert_eq!(tracker.total(), 0);
        for doctor in 0..3 {
            assert_eq!(tracker.len(doctor), 0);
        }
        assert_eq!(tracker.doctor_of(0), None);
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut tracker = ZeroTracker::new(4, 2);

        tracker.record(3, 0);
        tracker.record(1, 0);
        tracker.record(2, 0);

        assert_eq!(tracker.len(0), 3);
        assert_eq!(tracker.members(0).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(tracker.doctor_of(1), Some(0));
    }

    #[test]
    fn test_record_moves_patient_between_doctors() {
        let mut tracker = ZeroTracker::new(3, 3);

        tracker.record(0, 0);
        tracker.record(1, 0);
        assert_eq!(tracker.record(0, 2), Some(0));

        assert_eq!(tracker.len(0), 1);
        assert_eq!(tracker.len(2), 1);
        assert_eq!(tracker.total(), 2);
        assert_eq!(tracker.doctor_of(0), Some(2));
        assert_eq!(tracker.members(0).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_patient_in_at_most_one_list() {
        let mut tracker = ZeroTracker::new(2, 3);

        for doctor in [0, 1, 2, 1] {
            tracker.record(0, doctor);
        }

        let holders: usize = (0..3)
            .map(|doctor| tracker.members(doctor).filter(|&p| p == 0).count())
            .sum();
        assert_eq!(holders, 1);
        assert_eq!(tracker.doctor_of(0), Some(1));
    }

    #[test]
    fn test_release() {
        let mut tracker = ZeroTracker::new(2, 2);

        assert_eq!(tracker.release(0), None);
        tracker.record(0, 1);
        assert_eq!(tracker.release(0), Some(1));
        assert_eq!(tracker.len(1), 0);
        assert_eq!(tracker.total(), 0);
        assert_eq!(tracker.doctor_of(0), None);
    }
}
