//! Fixed-point satisfaction statistics.
//!
//! Mean ranks and first-choice rates are computed with `rust_decimal` so a
//! report prints the same digits on every machine.
//!
//! ## Examples
//!
//! ```
//! use rank_match::types::score::{mean_rank, format_rank};
//!
//! let mean = mean_rank(9, 6).unwrap();
//! assert_eq!(format_rank(mean), "1.50");
//! ```

use rust_decimal::Decimal;

/// Decimal places used when rendering a rank statistic
pub const RANK_DP: u32 = 2;

/// Mean attained rank, or `None` when nobody was placed
pub fn mean_rank(rank_total: u64, patients: u64) -> Option<Decimal> {
    ratio(rank_total, patients)
}

/// Share of patients who got their first choice, in `0..=1`
pub fn first_choice_rate(first_choice: u64, patients: u64) -> Option<Decimal> {
    ratio(first_choice, patients)
}

fn ratio(numerator: u64, denominator: u64) -> Option<Decimal> {
    if denominator == 0 {
        return None;
    }
    Decimal::from(numerator).checked_div(Decimal::from(denominator))
}

/// Render a rank statistic rounded to [`RANK_DP`] places
///
/// ```
/// use rank_match::types::score::format_rank;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_rank(Decimal::new(4, 0) / Decimal::new(3, 0)), "1.33");
/// ```
pub fn format_rank(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(RANK_DP))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_rank() {
        assert_eq!(mean_rank(6, 6), Some(Decimal::ONE));
        assert_eq!(mean_rank(9, 6), Some(Decimal::new(15, 1)));
        assert_eq!(mean_rank(0, 0), None);
    }

    #[test]
    fn test_first_choice_rate() {
        assert_eq!(first_choice_rate(3, 4), Some(Decimal::new(75, 2)));
        assert_eq!(first_choice_rate(1, 0), None);
    }

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(Decimal::ONE), "1.00");
        assert_eq!(format_rank(Decimal::new(5, 0) / Decimal::new(3, 0)), "1.67");
    }
}
