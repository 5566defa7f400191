//! rank-match - demo driver
//!
//! Runs the bundled sample preference matrices with a capacity of two
//! patients per doctor and prints each doctor's patients.
//!
//! Set `RUST_LOG=rank_match=debug` to see per-round progress.

use rank_match::types::score::format_rank;
use rank_match::{AssignmentEngine, MatchConfig, MatchError};
use tracing_subscriber::EnvFilter;

/// Maximum number of patients each doctor can take in the samples
const CAPACITY: usize = 2;

fn samples() -> Vec<(&'static str, Vec<Vec<u32>>)> {
    vec![
        (
            "six patients, six doctors",
            vec![
                vec![1, 2, 3, 4, 5, 6],
                vec![1, 2, 3, 4, 5, 6],
                vec![1, 3, 4, 6, 5, 2],
                vec![3, 6, 1, 2, 4, 5],
                vec![2, 6, 1, 3, 4, 5],
                vec![6, 5, 4, 3, 2, 1],
            ],
        ),
        (
            "three patients, three doctors",
            vec![vec![1, 2, 3], vec![1, 2, 3], vec![3, 2, 1]],
        ),
        (
            "six patients, three doctors",
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![1, 2, 3],
                vec![2, 3, 1],
                vec![2, 1, 3],
                vec![3, 2, 1],
            ],
        ),
    ]
}

fn main() -> Result<(), MatchError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rank_match=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let engine = AssignmentEngine::new(MatchConfig::new(CAPACITY));

    for (name, preferences) in samples() {
        println!("=== {name} (capacity {CAPACITY}) ===");

        let result = engine.assign(&preferences)?;
        for (doctor, patients) in result.assignment().iter().enumerate() {
            println!("Doctor {doctor} takes patient(s): {patients:?}");
        }

        let receipt = result.receipt()?;
        println!();
        println!("  Rounds:        {}", receipt.rounds);
        println!("  First choice:  {} of {}", receipt.first_choice, receipt.patients);
        if let Some(mean) = receipt.mean_rank() {
            println!("  Mean rank:     {}", format_rank(mean));
        }
        println!("  Digest:        {}", receipt.digest_hex());
        println!();
    }

    Ok(())
}
