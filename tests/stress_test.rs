//! Stress tests for the rank-reduction matcher.
//!
//! These tests verify:
//! 1. Every patient is placed exactly once on random feasible inputs
//! 2. No doctor ever exceeds capacity, including through the cascade
//! 3. A run never needs more rounds than there are doctors
//! 4. Determinism is preserved across runs
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

mod common;

use std::time::Instant;

use rank_match::{assign, AssignmentEngine, MatchConfig};

use common::{assert_valid_assignment, random_instance};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of random instances per sweep
const INSTANCE_COUNT: u64 = 2_000;

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Sweep small random instances of every shape.
///
/// Small shapes hit the cascade often: few doctors, tight capacity, and
/// many patients sharing a first choice.
#[test]
fn stress_random_small_instances() {
    let mut cascades = 0usize;

    for seed in 0..INSTANCE_COUNT {
        let doctors = 1 + (seed % 6) as usize;
        let patients = (seed % 17) as usize;
        let (preferences, capacity) = random_instance(patients, doctors, 1, seed);

        let result = assign(&preferences, capacity)
            .unwrap_or_else(|err| panic!("seed {seed}: {err}"));

        assert_valid_assignment(&result, patients, capacity);
        assert!(
            result.rounds() <= doctors,
            "seed {seed}: {} rounds for {doctors} doctors",
            result.rounds()
        );
        if result.rounds() > 1 {
            cascades += 1;
        }
    }

    println!("  Multi-round instances: {cascades} of {INSTANCE_COUNT}");
    assert!(cascades > 0, "expected some instances to need more than one round");
}

/// Exactly-full instances leave no spare seat anywhere.
#[test]
fn stress_tight_capacity() {
    for seed in 0..500u64 {
        let doctors = 2 + (seed % 5) as usize;
        let capacity = 1 + (seed % 3) as usize;
        let patients = doctors * capacity;
        let (preferences, _) = random_instance(patients, doctors, 0, seed);

        let result = assign(&preferences, capacity)
            .unwrap_or_else(|err| panic!("seed {seed}: {err}"));

        assert_valid_assignment(&result, patients, capacity);
        assert!(result.assignment().iter().all(|list| list.len() == capacity));
    }
}

/// Everyone wants the same doctor in the same order.
#[test]
fn stress_identical_preferences() {
    for doctors in 1..=8usize {
        for capacity in 1..=3usize {
            let patients = doctors * capacity;
            let row: Vec<u32> = (1..=doctors as u32).collect();
            let preferences = vec![row; patients];

            let result = assign(&preferences, capacity).unwrap();

            assert_valid_assignment(&result, patients, capacity);
            assert!(result.rounds() <= doctors);
        }
    }
}

/// Verify determinism: same input produces identical receipts.
#[test]
fn verify_determinism() {
    let (preferences, capacity) = random_instance(300, 12, 2, 12345);
    let engine = AssignmentEngine::new(MatchConfig::new(capacity));

    let first = engine.assign(&preferences).unwrap();
    let second = engine.assign(&preferences).unwrap();

    assert_eq!(first, second);
    let digest1 = first.receipt().unwrap().digest_hex();
    let digest2 = second.receipt().unwrap().digest_hex();
    println!("  Run 1 digest: {digest1}");
    println!("  Run 2 digest: {digest2}");
    assert_eq!(digest1, digest2, "digests must match for determinism");

    let (other, other_capacity) = random_instance(300, 12, 2, 12346);
    let third = assign(&other, other_capacity).unwrap();
    assert_ne!(digest1, third.receipt().unwrap().digest_hex());
}

/// Larger instances stay within the round bound.
#[test]
fn stress_scaling() {
    let shapes = [(100, 10), (1_000, 20), (2_000, 50)];

    println!("{:>10} {:>10} {:>10} {:>12}", "Patients", "Doctors", "Rounds", "Time");

    for (patients, doctors) in shapes {
        let (preferences, capacity) = random_instance(patients, doctors, 0, 42);

        let start = Instant::now();
        let result = assign(&preferences, capacity).unwrap();
        let elapsed = start.elapsed();

        println!(
            "{:>10} {:>10} {:>10} {:>12.2?}",
            patients,
            doctors,
            result.rounds(),
            elapsed
        );

        assert_valid_assignment(&result, patients, capacity);
        assert!(result.rounds() <= doctors);
    }
}
