//! Preference matrix with explicit per-cell status.
//!
//! ## Layout
//!
//! Cells are stored row-major in a single `Vec`: patient `p`, doctor `d`
//! lives at `p * doctors + d`. The stated ranks are kept alongside so a
//! finished run can report what each patient actually got.
//!
//! ## Cell Lifecycle
//!
//! ```text
//! Active(rank) --decrement--> Active(rank - 1) --...--> Active(0)
//!                                                          |
//!                                  +-----------------------+
//!                                  v                       v
//!                             Invalidated              Finalized
//! ```

use crate::error::{MalformedRow, MatchError};

/// Status of one (patient, doctor) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Remaining rank; `Active(0)` means this doctor is the patient's
    /// current best remaining choice
    Active(u32),

    /// A zero that was superseded by a zero in another column
    Invalidated,

    /// The patient was assigned to this doctor
    Finalized,
}

impl Cell {
    /// True for `Active(0)`
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Cell::Active(0)
    }
}

/// N×D working grid of a single run.
#[derive(Debug, Clone)]
pub struct PreferenceMatrix {
    cells: Vec<Cell>,
    stated: Vec<u32>,
    patients: usize,
    doctors: usize,
}

impl PreferenceMatrix {
    /// Build a matrix from stated rankings, validating every row.
    ///
    /// The doctor count is taken from the first row. Each row must be a
    /// permutation of `1..=doctors`.
    ///
    /// # Example
    ///
    /// ```
    /// use rank_match::matrix::{Cell, PreferenceMatrix};
    ///
    /// let matrix = PreferenceMatrix::from_rows(&[vec![2, 1], vec![1, 2]]).unwrap();
    /// assert_eq!(matrix.patients(), 2);
    /// assert_eq!(matrix.cell(0, 1), Cell::Active(1));
    /// ```
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, MatchError> {
        let patients = rows.len();
        let doctors = rows.first().map_or(0, Vec::len);

        let mut stated = Vec::with_capacity(patients * doctors);
        let mut seen = vec![false; doctors];

        for (patient, row) in rows.iter().enumerate() {
            validate_row(row, doctors, &mut seen)
                .map_err(|reason| MatchError::MalformedPreference { patient, reason })?;
            stated.extend_from_slice(row);
        }

        Ok(Self {
            cells: stated.iter().map(|&rank| Cell::Active(rank)).collect(),
            stated,
            patients,
            doctors,
        })
    }

    #[inline]
    pub fn patients(&self) -> usize {
        self.patients
    }

    #[inline]
    pub fn doctors(&self) -> usize {
        self.doctors
    }

    #[inline]
    fn index(&self, patient: usize, doctor: usize) -> usize {
        debug_assert!(patient < self.patients && doctor < self.doctors);
        patient * self.doctors + doctor
    }

    /// Current status of a cell
    #[inline]
    pub fn cell(&self, patient: usize, doctor: usize) -> Cell {
        self.cells[self.index(patient, doctor)]
    }

    /// The rank the patient originally gave this doctor
    #[inline]
    pub fn stated_rank(&self, patient: usize, doctor: usize) -> u32 {
        self.stated[self.index(patient, doctor)]
    }

    /// Decrement an active cell by one.
    ///
    /// Returns `true` exactly when the cell moves from 1 to 0. Cells that
    /// are not active, or already zero, are left untouched.
    pub fn decrement(&mut self, patient: usize, doctor: usize) -> bool {
        let idx = self.index(patient, doctor);
        match &mut self.cells[idx] {
            Cell::Active(rank) if *rank > 0 => {
                *rank -= 1;
                *rank == 0
            }
            _ => false,
        }
    }

    /// Mark a stale zero as superseded
    pub fn invalidate(&mut self, patient: usize, doctor: usize) {
        let idx = self.index(patient, doctor);
        self.cells[idx] = Cell::Invalidated;
    }

    /// Mark the cell of a committed assignment
    pub fn finalize(&mut self, patient: usize, doctor: usize) {
        let idx = self.index(patient, doctor);
        self.cells[idx] = Cell::Finalized;
    }

    /// Row view of the current cell states for one patient
    pub fn row(&self, patient: usize) -> &[Cell] {
        let start = patient * self.doctors;
        &self.cells[start..start + self.doctors]
    }
}

fn validate_row(row: &[u32], doctors: usize, seen: &mut [bool]) -> Result<(), MalformedRow> {
    if row.len() != doctors {
        return Err(MalformedRow::Length {
            expected: doctors,
            found: row.len(),
        });
    }

    seen.fill(false);
    for &rank in row {
        let slot = (rank as usize)
            .checked_sub(1)
            .filter(|&slot| slot < doctors)
            .ok_or(MalformedRow::OutOfRange { rank, doctors })?;
        if seen[slot] {
            return Err(MalformedRow::Duplicate { rank });
        }
        seen[slot] = true;
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
