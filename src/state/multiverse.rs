// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Multiverse State definition.
//!
//! Universes are residue classes; `u → v` is admitted when `v` refines `u`
//! (`u.n` divides `v.n` and `v.a ≡ u.a (mod u.n)`). Edges are always derived
//! by a full rebuild, capped at `max_out_degree` per source in vertex
//! enumeration order.

use rustc_hash::FxHashSet;

use crate::config::MultiverseConfig;
use crate::error::{MultiverseError, Result};
use crate::graph::DirectedGraph;
use crate::state::command::Command;
use crate::storage::GrowableArray;
use crate::types::ResidueClass;

pub struct Multiverse {
    config: MultiverseConfig,
    graph: DirectedGraph<ResidueClass>,
}

/// Connection rule for `source → candidate`.
fn admits(source: &ResidueClass, candidate: &ResidueClass) -> bool {
    source != candidate && candidate.refines(source)
}

impl Multiverse {
    pub fn new() -> Self {
        Self::with_config(MultiverseConfig::default())
    }

    pub fn with_config(config: MultiverseConfig) -> Self {
        Self {
            config,
            graph: DirectedGraph::new(),
        }
    }

    /// Multiverse holding every class of every configured seed modulus.
    pub fn seeded() -> Result<Self> {
        Self::seeded_with(MultiverseConfig::default())
    }

    pub fn seeded_with(config: MultiverseConfig) -> Result<Self> {
        let moduli = config.seed_moduli.clone();
        let mut multiverse = Self::with_config(config);
        multiverse.seed(&moduli)?;
        Ok(multiverse)
    }

    /// Adds `[a]Z_n` for every `0 <= a < n` of each modulus, skipping classes
    /// already present, then recomputes once. Returns the number added.
    ///
    /// All moduli are validated before anything is inserted.
    pub fn seed(&mut self, moduli: &[i64]) -> Result<usize> {
        if let Some(&bad) = moduli.iter().find(|&&n| n <= 1) {
            return Err(MultiverseError::InvalidModulus(bad));
        }

        let mut added = 0;
        for &n in moduli {
            for a in 0..n {
                let universe = ResidueClass::new(a, n)?;
                if !self.graph.has_vertex(&universe) {
                    self.graph.add_vertex(universe);
                    added += 1;
                }
            }
        }
        tracing::debug!("Seeded {} universes from {} moduli", added, moduli.len());
        self.recompute_edges();
        Ok(added)
    }

    // --- Read APIs ---

    pub fn config(&self) -> &MultiverseConfig {
        &self.config
    }

    pub fn graph(&self) -> &DirectedGraph<ResidueClass> {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, universe: &ResidueClass) -> bool {
        self.graph.has_vertex(universe)
    }

    /// Universes in enumeration (insertion) order.
    pub fn vertices(&self) -> impl Iterator<Item = &ResidueClass> + '_ {
        self.graph.vertices()
    }

    pub fn neighbors(&self, universe: &ResidueClass) -> GrowableArray<ResidueClass> {
        self.graph.neighbors(universe)
    }

    /// Universes pointing at `universe`, then those it points at, each once.
    pub fn related(&self, universe: &ResidueClass) -> GrowableArray<ResidueClass> {
        let mut related = GrowableArray::new();
        let mut seen = FxHashSet::default();

        for vertex in self.graph.vertices() {
            if self.graph.has_edge(vertex, universe) && seen.insert(*vertex) {
                related.append(*vertex);
            }
        }
        for neighbor in &self.graph.neighbors(universe) {
            if seen.insert(*neighbor) {
                related.append(*neighbor);
            }
        }
        related
    }

    /// `[a]ℤn --> ([...])` for one universe.
    pub fn describe(&self, universe: &ResidueClass) -> Result<String> {
        self.graph.describe_vertex(universe)
    }

    // --- Write Logic ---

    pub fn apply(&mut self, cmd: &Command) -> Result<()> {
        match *cmd {
            Command::AddUniverse { a, n } => {
                self.add_universe(a, n)?;
            }
            Command::RemoveUniverse { a, n } => {
                self.remove_universe(a, n)?;
            }
            Command::RemoveOrbit { n } => {
                self.remove_orbit(n)?;
            }
            Command::Recompute => self.recompute_edges(),
        }
        Ok(())
    }

    pub fn add_universe(&mut self, a: i64, n: i64) -> Result<ResidueClass> {
        let universe = ResidueClass::new(a, n)?;
        self.add(universe)?;
        Ok(universe)
    }

    /// Inserts `universe` and rebuilds every edge.
    pub fn add(&mut self, universe: ResidueClass) -> Result<()> {
        if self.graph.has_vertex(&universe) {
            tracing::warn!("Rejected duplicate universe {}", universe);
            return Err(MultiverseError::DuplicateVertex {
                a: universe.residue(),
                n: universe.modulus(),
            });
        }
        self.graph.add_vertex(universe);
        tracing::debug!("Universe {} added", universe);
        self.recompute_edges();
        Ok(())
    }

    /// Returns `Ok(false)` when the (valid) class is not in the multiverse.
    pub fn remove_universe(&mut self, a: i64, n: i64) -> Result<bool> {
        let universe = ResidueClass::new(a, n)?;
        Ok(self.remove(&universe))
    }

    /// Removes `universe` with its incident edges, then rebuilds every edge.
    pub fn remove(&mut self, universe: &ResidueClass) -> bool {
        if !self.graph.remove_vertex(universe) {
            tracing::debug!("Universe {} not present, nothing removed", universe);
            return false;
        }
        tracing::debug!("Universe {} removed", universe);
        self.recompute_edges();
        true
    }

    /// Removes every universe of modulus `n`. Returns how many were removed.
    pub fn remove_orbit(&mut self, n: i64) -> Result<usize> {
        if n <= 1 {
            return Err(MultiverseError::InvalidModulus(n));
        }

        let doomed: GrowableArray<ResidueClass> = self
            .graph
            .vertices()
            .filter(|u| u.modulus() == n)
            .copied()
            .collect();
        for universe in &doomed {
            self.graph.remove_vertex(universe);
        }

        if !doomed.is_empty() {
            tracing::debug!("Orbit {} removed ({} universes)", n, doomed.len());
            self.recompute_edges();
        }
        Ok(doomed.len())
    }

    /// Discards and regenerates the whole edge set.
    pub fn recompute_edges(&mut self) {
        let vertices: GrowableArray<ResidueClass> = self.graph.vertices().copied().collect();
        let cap = self.config.max_out_degree;

        for source in &vertices {
            let mut admitted = GrowableArray::new();
            let mut seen = FxHashSet::default();

            for candidate in &vertices {
                if admitted.len() >= cap {
                    break;
                }
                if admits(source, candidate) && seen.insert(*candidate) {
                    admitted.append(*candidate);
                }
            }

            tracing::trace!("{} admitted {} neighbors", source, admitted.len());
            self.graph.set_neighbors(*source, admitted);
        }

        tracing::debug!(
            "Recomputed edges: {} universes, {} edges",
            vertices.len(),
            self.graph.edge_count()
        );
    }
}

impl Default for Multiverse {
    fn default() -> Self {
        Self::new()
    }
}
