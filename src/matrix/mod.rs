//! Working state of one matching run.
//!
//! ## Components
//!
//! - [`PreferenceMatrix`]: N×D grid of [`Cell`]s, reduced round by round
//! - [`ZeroNode`]: Slab entry for one zero held by one patient
//! - [`ZeroSet`]: Ordered zero list of a single doctor
//! - [`ZeroTracker`]: All zero lists plus the patient index
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Decrement a cell | O(1) |
//! | Record a zero | O(1) |
//! | Release a stale zero | O(1) |
//! | Zero list length | O(1) |

pub mod grid;
pub mod node;
pub mod zero_set;
pub mod tracker;

pub use grid::{Cell, PreferenceMatrix};
pub use node::ZeroNode;
pub use zero_set::{ZeroSet, ZeroSetIter};
pub use tracker::ZeroTracker;
