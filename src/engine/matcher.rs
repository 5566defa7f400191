//! Rank-reduction matcher.
//!
//! ## Algorithm
//!
//! Each round runs four steps, in this order, until every patient is placed:
//!
//! 1. **Reduce**: lower every active cell of every unplaced patient in every
//!    open column by one. Cells reaching zero are queued as zero events.
//! 2. **Reconcile**: drain the event queue. A zero moves the patient into
//!    that doctor's zero list and invalidates the stale zero they held in a
//!    frozen column. If the frozen doctor drops back to exactly capacity, a
//!    saturation event jumps the queue and places its remaining patients.
//! 3. **Settle**: any doctor whose zero list fits within capacity takes all
//!    of its unplaced patients; reaching capacity closes the column.
//! 4. **Mark overflow**: open doctors with more zeros than capacity are
//!    frozen, forcing their patients to reveal the next choice.
//!
//! Rows are scanned in index order and doctors in index order, so ties are
//! always broken the same way.

use std::collections::VecDeque;

use tracing::{debug, info, trace, warn};

use crate::engine::MatchConfig;
use crate::error::MatchError;
use crate::matrix::{PreferenceMatrix, ZeroTracker};
use crate::types::{MatchReceipt, Placement};

// ============================================================================
// Column state
// ============================================================================

/// Whether a doctor column still takes part in rank reduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnState {
    /// Still reduced every round
    #[default]
    Open,
    /// More zeros than capacity; waiting for patients to move on
    Frozen,
    /// Assignment is at capacity
    Full,
}

impl ColumnState {
    /// Frozen and full columns are both covered
    #[inline]
    pub fn is_covered(self) -> bool {
        self != ColumnState::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZeroEvent {
    /// A patient's cell reached zero in an open column
    Zero { patient: usize, doctor: usize },
    /// A frozen doctor is back at exactly capacity
    Saturated { doctor: usize },
}

// ============================================================================
// Match result
// ============================================================================

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Doctor index -> patients in the order they were placed
    assignment: Vec<Vec<usize>>,

    /// One placement per patient, indexed by patient
    placements: Vec<Placement>,

    capacity: usize,
    rounds: usize,
}

impl MatchResult {
    /// Doctor to patients mapping
    pub fn assignment(&self) -> &[Vec<usize>] {
        &self.assignment
    }

    pub fn into_assignment(self) -> Vec<Vec<usize>> {
        self.assignment
    }

    /// Patients placed with a doctor, or None for an unknown doctor
    pub fn patients_of(&self, doctor: usize) -> Option<&[usize]> {
        self.assignment.get(doctor).map(Vec::as_slice)
    }

    /// Doctor a patient was placed with
    pub fn doctor_of(&self, patient: usize) -> Option<usize> {
        self.placements.get(patient).map(|p| p.doctor as usize)
    }

    /// Placements ordered by patient
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[inline]
    pub fn patients(&self) -> usize {
        self.placements.len()
    }

    #[inline]
    pub fn doctors(&self) -> usize {
        self.assignment.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Driver-loop rounds the run needed
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Summarize the run with a deterministic digest
    pub fn receipt(&self) -> Result<MatchReceipt, MatchError> {
        MatchReceipt::from_placements(
            &self.placements,
            self.doctors(),
            self.capacity,
            self.rounds,
        )
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Capacitated patient-to-doctor matcher.
///
/// The engine only holds configuration; every call to
/// [`assign`](Self::assign) builds and discards its own working state.
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    config: MatchConfig,
}

impl AssignmentEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Engine with the given capacity and the default round cap
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(MatchConfig::new(capacity))
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Assign every patient to a doctor.
    ///
    /// `preferences[p][d]` is the rank patient `p` gives doctor `d`
    /// (1 = most preferred). Each row must be a permutation of
    /// `1..=doctors`, and `capacity * doctors` must cover every patient.
    ///
    /// # Errors
    ///
    /// - [`MatchError::MalformedPreference`] for an invalid row
    /// - [`MatchError::InfeasibleCapacity`] when there are not enough seats
    /// - [`MatchError::Nontermination`] when the round cap is hit
    pub fn assign(&self, preferences: &[Vec<u32>]) -> Result<MatchResult, MatchError> {
        let matrix = PreferenceMatrix::from_rows(preferences)?;
        let patients = matrix.patients();
        let doctors = matrix.doctors();
        let capacity = self.config.capacity;

        let seats = capacity.checked_mul(doctors).unwrap_or(usize::MAX);
        if seats < patients {
            return Err(MatchError::InfeasibleCapacity {
                capacity,
                doctors,
                patients,
            });
        }

        let round_cap = self.config.round_cap(doctors);
        let mut state = RunState::new(matrix, capacity);

        while !state.is_done() {
            if state.rounds >= round_cap {
                warn!(
                    rounds = state.rounds,
                    assigned = state.assigned,
                    patients,
                    "round cap reached"
                );
                return Err(MatchError::Nontermination {
                    rounds: state.rounds,
                    assigned: state.assigned,
                    patients,
                });
            }
            state.step();
        }

        info!(patients, doctors, capacity, rounds = state.rounds, "assignment complete");
        Ok(state.finish())
    }
}

/// Assign patients with the default round cap.
///
/// ```
/// let result = rank_match::assign(&[vec![1, 2], vec![1, 2]], 1).unwrap();
/// assert_eq!(result.assignment(), &[vec![1], vec![0]]);
/// ```
pub fn assign(preferences: &[Vec<u32>], capacity: usize) -> Result<MatchResult, MatchError> {
    AssignmentEngine::with_capacity(capacity).assign(preferences)
}

// ============================================================================
// Run state
// ============================================================================

/// All mutable state of a single run
#[derive(Debug)]
struct RunState {
    matrix: PreferenceMatrix,
    tracker: ZeroTracker,
    capacity: usize,
    covered_rows: Vec<bool>,
    assigned: usize,
    columns: Vec<ColumnState>,
    assignment: Vec<Vec<usize>>,
    worklist: VecDeque<ZeroEvent>,
    rounds: usize,
}

impl RunState {
    fn new(matrix: PreferenceMatrix, capacity: usize) -> Self {
        let patients = matrix.patients();
        let doctors = matrix.doctors();
        Self {
            tracker: ZeroTracker::new(patients, doctors),
            capacity,
            covered_rows: vec![false; patients],
            assigned: 0,
            columns: vec![ColumnState::Open; doctors],
            assignment: vec![Vec::new(); doctors],
            worklist: VecDeque::new(),
            rounds: 0,
            matrix,
        }
    }

    #[inline]
    fn is_done(&self) -> bool {
        self.assigned == self.matrix.patients()
    }

    fn step(&mut self) {
        self.rounds += 1;
        let zeros = self.reduce();
        self.reconcile();
        self.settle();
        let frozen = self.mark_overflow();

        debug!(
            round = self.rounds,
            zeros,
            frozen,
            assigned = self.assigned,
            "round complete"
        );
    }

    /// Lower every uncovered cell by one, queueing new zeros
    fn reduce(&mut self) -> usize {
        let mut zeros = 0;
        for patient in 0..self.matrix.patients() {
            if self.covered_rows[patient] {
                continue;
            }
            for doctor in 0..self.matrix.doctors() {
                if self.columns[doctor].is_covered() {
                    continue;
                }
                if self.matrix.decrement(patient, doctor) {
                    self.worklist.push_back(ZeroEvent::Zero { patient, doctor });
                    zeros += 1;
                }
            }
        }
        zeros
    }

    /// Drain the zero events queued by [`reduce`](Self::reduce)
    fn reconcile(&mut self) {
        while let Some(event) = self.worklist.pop_front() {
            match event {
                ZeroEvent::Zero { patient, doctor } => self.record_zero(patient, doctor),
                ZeroEvent::Saturated { doctor } => self.finalize_frozen(doctor),
            }
        }
    }

    fn record_zero(&mut self, patient: usize, doctor: usize) {
        if self.covered_rows[patient] {
            trace!(patient, doctor, "dropping zero of placed patient");
            return;
        }

        let Some(stale) = self.tracker.record(patient, doctor) else {
            return;
        };
        self.matrix.invalidate(patient, stale);

        if self.columns[stale] == ColumnState::Frozen && self.tracker.len(stale) == self.capacity {
            trace!(doctor = stale, "frozen doctor back at capacity");
            self.worklist.push_front(ZeroEvent::Saturated { doctor: stale });
        }
    }

    /// Place every unplaced patient left in a frozen doctor's zero list
    fn finalize_frozen(&mut self, doctor: usize) {
        for patient in self.pending(doctor) {
            self.commit(patient, doctor);
        }
        self.columns[doctor] = ColumnState::Full;
    }

    /// Place patients with every doctor whose zero list fits capacity
    fn settle(&mut self) {
        for doctor in 0..self.columns.len() {
            if self.tracker.len(doctor) > self.capacity {
                continue;
            }
            for patient in self.pending(doctor) {
                self.commit(patient, doctor);
            }
            if self.assignment[doctor].len() == self.capacity {
                self.columns[doctor] = ColumnState::Full;
            }
        }
    }

    /// Freeze open doctors with more zeros than capacity
    fn mark_overflow(&mut self) -> usize {
        let mut frozen = 0;
        for doctor in 0..self.columns.len() {
            if self.columns[doctor] == ColumnState::Open && self.tracker.len(doctor) > self.capacity {
                self.columns[doctor] = ColumnState::Frozen;
                frozen += 1;
            }
        }
        frozen
    }

    /// Unplaced members of a doctor's zero list, earliest first
    fn pending(&self, doctor: usize) -> Vec<usize> {
        self.tracker
            .members(doctor)
            .filter(|&patient| !self.covered_rows[patient])
            .collect()
    }

    fn commit(&mut self, patient: usize, doctor: usize) {
        self.covered_rows[patient] = true;
        self.assigned += 1;
        self.assignment[doctor].push(patient);
        self.matrix.finalize(patient, doctor);
    }

    fn finish(self) -> MatchResult {
        let mut placements = vec![Placement::default(); self.matrix.patients()];
        for (doctor, patients) in self.assignment.iter().enumerate() {
            for &patient in patients {
                placements[patient] =
                    Placement::new(patient, doctor, self.matrix.stated_rank(patient, doctor));
            }
        }

        MatchResult {
            assignment: self.assignment,
            placements,
            capacity: self.capacity,
            rounds: self.rounds,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
