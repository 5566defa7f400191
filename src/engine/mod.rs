//! Matching engine for capacitated patient-to-doctor assignment.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Integer Ranks**: No floating-point operations in the matcher
//! 3. **Synchronous Execution**: One run, one owned state, no sharing
//! 4. **Eager Validation**: Bad input is rejected before the first round
//!
//! ## Example
//!
//! ```
//! use rank_match::engine::{AssignmentEngine, MatchConfig};
//!
//! let engine = AssignmentEngine::new(MatchConfig::new(2));
//! let preferences = vec![vec![1, 2, 3], vec![1, 2, 3], vec![3, 2, 1]];
//!
//! let result = engine.assign(&preferences).unwrap();
//! assert_eq!(result.patients_of(0), Some(&[0, 1][..]));
//! assert_eq!(result.patients_of(2), Some(&[2][..]));
//! ```

pub mod config;
pub mod matcher;

pub use config::MatchConfig;
pub use matcher::{assign, AssignmentEngine, ColumnState, MatchResult};
