//! Graph Edge definition.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use core::fmt;

/// Directed edge `from → to`, produced by `DirectedGraph::edges`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V) -> Self {
        Self { from, to }
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
