// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Slot count of a freshly created or cleared array.
pub const INITIAL_CAPACITY: usize = 1;

/// Capacity multiplier applied when an append or insert hits a full buffer.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity is halved once the live count falls to `capacity / SHRINK_DIVISOR`.
pub const SHRINK_DIVISOR: usize = 4;

/// Maximum number of outgoing edges admitted per universe during recompute.
pub const MAX_OUT_DEGREE: usize = 6;

/// Moduli whose full residue systems make up the seeded multiverse.
pub const SEED_MODULI: [i64; 7] = [2, 3, 4, 6, 8, 9, 12];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiverseConfig {
    pub max_out_degree: usize,
    pub seed_moduli: Vec<i64>,
}

impl Default for MultiverseConfig {
    fn default() -> Self {
        Self {
            max_out_degree: MAX_OUT_DEGREE,
            seed_moduli: SEED_MODULI.to_vec(),
        }
    }
}
