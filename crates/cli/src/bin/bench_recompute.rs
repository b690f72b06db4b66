use anyhow::Result;
use std::time::Instant;
use zn_multiverse::config::MultiverseConfig;
use zn_multiverse::Multiverse;

// Moduli 2..=MAX_MODULUS give sum(2..=24) = 299 universes.
const MAX_MODULUS: i64 = 24;
const ROUNDS: usize = 20;

fn main() -> Result<()> {
    println!("Starting Multiverse Recompute Benchmark...");

    let config = MultiverseConfig {
        seed_moduli: (2..=MAX_MODULUS).collect(),
        ..MultiverseConfig::default()
    };

    let start = Instant::now();
    let mut multiverse = Multiverse::seeded_with(config)?;
    println!(
        "Seeded {} universes / {} edges in {:?}",
        multiverse.len(),
        multiverse.graph().edge_count(),
        start.elapsed()
    );

    let start = Instant::now();
    for _ in 0..ROUNDS {
        multiverse.recompute_edges();
    }
    let per_round = start.elapsed() / ROUNDS as u32;
    println!("Full recompute: {:?} per round", per_round);

    // Churn: remove and re-add one universe per modulus.
    let start = Instant::now();
    let mut churned: u32 = 0;
    for n in 2..=MAX_MODULUS {
        multiverse.remove_universe(n - 1, n)?;
        multiverse.add_universe(n - 1, n)?;
        churned += 1;
    }
    println!(
        "Churned {} universes in {:?} ({:?} per add/remove pair)",
        churned,
        start.elapsed(),
        start.elapsed() / churned
    );

    Ok(())
}
