//! Graph algorithms module.
//!
//! This module provides:
//! - Disjoint-set union (path compression, union by size)
//! - Minimum spanning tree (Kruskal's and Prim's algorithms)
//! - Single-source shortest paths (Dijkstra, two staleness policies)
//! - Articulation points and bridges

use std::cmp::Ordering;

use crate::{Vertex, Weight};

mod biconnected;
mod mst;
mod shortest_path;
mod union_find;

pub use biconnected::BiconnectedResult;
pub use mst::{kruskal_mst, MstResult};
pub use shortest_path::{ShortestPathConfig, ShortestPathResult, StalenessPolicy};
pub use union_find::DisjointSet;

/// Entry in the Prim/Dijkstra priority queue.
///
/// `key` is the edge weight for Prim and the weight-so-far for Dijkstra.
/// `weight` is the weight of the edge `parent - vertex`.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    key: Weight,
    vertex: Vertex,
    parent: Option<Vertex>,
    weight: Weight,
}

impl FrontierEntry {
    const fn root(vertex: Vertex) -> Self {
        Self {
            key: 0,
            vertex,
            parent: None,
            weight: 0,
        }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (lower key = higher priority)
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    #[test]
    fn test_frontier_pops_smallest_key_first() {
        let mut heap = BinaryHeap::new();
        for (key, vertex) in [(5, 0), (1, 1), (3, 2), (1, 3)] {
            heap.push(FrontierEntry {
                key,
                vertex,
                parent: None,
                weight: key,
            });
        }

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.key, e.vertex))
            .collect();
        assert_eq!(order, vec![(1, 1), (1, 3), (3, 2), (5, 0)]);
    }
}
