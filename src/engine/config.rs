//! Run configuration.

/// Settings for an [`AssignmentEngine`](crate::AssignmentEngine).
///
/// ## Example
///
/// ```
/// use rank_match::MatchConfig;
///
/// let config = MatchConfig::new(2).with_max_rounds(10);
/// assert_eq!(config.round_cap(3), 10);
/// assert_eq!(MatchConfig::new(2).round_cap(3), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum number of patients per doctor
    pub capacity: usize,

    /// Upper bound on driver-loop rounds; `None` derives it from the
    /// doctor count
    pub max_rounds: Option<usize>,
}

impl MatchConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_rounds: None,
        }
    }

    /// Override the round cap
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Round cap for a run over `doctors` columns.
    ///
    /// A valid run finishes within one round per doctor: every round lowers
    /// each open cell of every pending patient, so by round `doctors` each
    /// of them has reached a zero in every column that stayed open.
    pub fn round_cap(&self, doctors: usize) -> usize {
        self.max_rounds.unwrap_or_else(|| doctors.saturating_add(1))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
