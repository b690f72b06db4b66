// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! zn-multiverse: residue classes `[a]Z_n` connected by subgroup refinement,
//! stored in a directed graph built on hand-managed growable arrays.
//!
//! Single-threaded: every operation runs to completion and the structures
//! carry no internal locking.

pub mod config;
pub mod error;
pub mod types;
pub mod storage;
pub mod graph;
pub mod state;

pub use error::{MultiverseError, Result};
pub use graph::{DirectedGraph, Edge};
pub use state::{Command, Multiverse};
pub use storage::{GrowableArray, OrderedMap};
pub use types::ResidueClass;

#[cfg(test)]
pub mod tests;
