//! Shared helpers for the integration tests.

#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rank_match::MatchResult;

/// Generate a feasible instance: random strict rankings and the smallest
/// capacity that seats everyone, plus `slack`.
pub fn random_instance(
    patients: usize,
    doctors: usize,
    slack: usize,
    seed: u64,
) -> (Vec<Vec<u32>>, usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let base: Vec<u32> = (1..=doctors as u32).collect();

    let preferences = (0..patients)
        .map(|_| {
            let mut row = base.clone();
            row.shuffle(&mut rng);
            row
        })
        .collect();

    let capacity = patients.div_ceil(doctors).max(1) + rng.gen_range(0..=slack);
    (preferences, capacity)
}

/// Every patient placed exactly once, no doctor over capacity, and the
/// placement table agrees with the per-doctor lists.
pub fn assert_valid_assignment(result: &MatchResult, patients: usize, capacity: usize) {
    let mut seen = vec![0usize; patients];

    for (doctor, list) in result.assignment().iter().enumerate() {
        assert!(
            list.len() <= capacity,
            "doctor {doctor} holds {} patients, capacity {capacity}",
            list.len()
        );
        for &patient in list {
            seen[patient] += 1;
            assert_eq!(result.doctor_of(patient), Some(doctor));
        }
    }

    for (patient, &count) in seen.iter().enumerate() {
        assert_eq!(count, 1, "patient {patient} placed {count} times");
    }
}
