// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod adjacency;
pub mod edge;

pub use adjacency::DirectedGraph;
pub use edge::Edge;
