//! Result types for the rank-reduction matcher
//!
//! ## Types
//!
//! - [`Placement`]: One patient assigned to one doctor, with the stated rank
//! - [`MatchReceipt`]: Run summary with a deterministic digest
//! - [`score`]: Fixed-point satisfaction statistics
//!
//! Placements and receipts derive SSZ `SimpleSerialize`, so every finished
//! assignment has exactly one byte encoding.

mod placement;
mod receipt;
pub mod score;

pub use placement::Placement;
pub use receipt::MatchReceipt;
