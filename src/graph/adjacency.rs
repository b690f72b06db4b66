// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Adjacency-list directed graph.

use core::fmt;

use crate::error::Result;
use crate::graph::edge::Edge;
use crate::storage::{GrowableArray, OrderedMap};

/// Directed graph keyed by vertex value.
///
/// A vertex exists iff it is a key of `adjacency`; `u → v` exists iff `v`
/// appears in `adjacency[u]`. The graph itself does not reject duplicate
/// edges or self-loops.
pub struct DirectedGraph<V> {
    adjacency: OrderedMap<V, GrowableArray<V>>,
}

/// Rebuilds `list` into a fresh array without any element equal to `target`.
fn without<V: PartialEq + Clone>(list: &GrowableArray<V>, target: &V) -> GrowableArray<V> {
    list.iter().filter(|item| *item != target).cloned().collect()
}

impl<V: PartialEq + Clone> DirectedGraph<V> {
    pub fn new() -> Self {
        Self {
            adjacency: OrderedMap::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(GrowableArray::len).sum()
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains(vertex)
    }

    /// Adds `vertex` with no outgoing edges. No-op if already present.
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains(&vertex) {
            self.adjacency.set(vertex, GrowableArray::new());
        }
    }

    /// Appends `to` to the adjacency of `from`, adding missing endpoints.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());
        if let Ok(list) = self.adjacency.get_mut(&from) {
            list.append(to);
        }
    }

    /// Drops every `from → to` edge. No-op if `from` is absent.
    pub fn remove_edge(&mut self, from: &V, to: &V) {
        if let Ok(list) = self.adjacency.get(from) {
            let rebuilt = without(list, to);
            self.adjacency.set(from.clone(), rebuilt);
        }
    }

    /// Removes `vertex` and every edge pointing at it.
    ///
    /// Returns whether `vertex` was a key. The sweep runs either way.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let existed = self.adjacency.delete(vertex).is_ok();

        // Cascading sweep: every remaining list is rebuilt, O(V * E).
        let remaining: GrowableArray<V> = self.adjacency.keys().cloned().collect();
        for key in remaining {
            if let Ok(list) = self.adjacency.get(&key) {
                let rebuilt = without(list, vertex);
                self.adjacency.set(key, rebuilt);
            }
        }
        existed
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .map(|list| list.contains(to))
            .unwrap_or(false)
    }

    /// Copy of the outgoing neighbors of `vertex`; empty when absent.
    pub fn neighbors(&self, vertex: &V) -> GrowableArray<V> {
        self.adjacency
            .get(vertex)
            .map(|list| list.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn out_degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map(GrowableArray::len).unwrap_or(0)
    }

    /// Replaces the whole adjacency of `vertex`. The vertex and every
    /// neighbor are added first if missing.
    pub fn set_neighbors(&mut self, vertex: V, neighbors: GrowableArray<V>) {
        self.add_vertex(vertex.clone());
        for neighbor in &neighbors {
            self.add_vertex(neighbor.clone());
        }
        self.adjacency.set(vertex, neighbors);
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    pub fn edges(&self) -> GrowableArray<Edge<V>> {
        let mut edges = GrowableArray::new();
        for (from, list) in self.adjacency.iter() {
            for to in list {
                edges.append(Edge::new(from.clone(), to.clone()));
            }
        }
        edges
    }
}

impl<V: PartialEq + Clone + fmt::Display> DirectedGraph<V> {
    /// One-line rendering of a single adjacency list: `v --> ([a, b])`.
    pub fn describe_vertex(&self, vertex: &V) -> Result<String> {
        let list = self.adjacency.get(vertex)?;
        Ok(format!("{vertex} --> {list}"))
    }
}

impl<V: PartialEq + Clone> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq + Clone> Clone for DirectedGraph<V> {
    fn clone(&self) -> Self {
        Self {
            adjacency: self.adjacency.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl<V: PartialEq + Clone + fmt::Display> fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.adjacency.iter() {
            writeln!(f, "{vertex} --> {list}")?;
        }
        Ok(())
    }
}
