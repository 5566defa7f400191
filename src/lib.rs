//! # rank-match
//!
//! Capacitated many-to-one preference matching: every patient ranks every
//! doctor, every doctor takes at most `capacity` patients, and an iterative
//! rank-reduction procedure (a capacitated variant of the Hungarian method)
//! assigns each patient to exactly one doctor.
//!
//! ## Architecture
//!
//! - **Matrix**: Preference grid with per-cell status, plus zero tracking
//! - **Engine**: Reduction, reconciliation, settling and overflow rounds
//! - **Types**: Placements, receipts and satisfaction statistics
//!
//! ## Preconditions
//!
//! 1. Each row is a permutation of `1..=doctors`
//! 2. `capacity * doctors >= patients`
//!
//! Both are checked before the first round; see [`MatchError`].

// ============================================================================
// Module declarations
// ============================================================================

/// Error taxonomy
pub mod error;

/// Working state: preference matrix and zero lists
pub mod matrix;

/// Matching engine and run configuration
pub mod engine;

/// Placements, receipts, statistics
pub mod types;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{assign, AssignmentEngine, MatchConfig, MatchResult};
pub use error::{MalformedRow, MatchError};
pub use matrix::{Cell, PreferenceMatrix, ZeroTracker};
pub use types::{MatchReceipt, Placement};
