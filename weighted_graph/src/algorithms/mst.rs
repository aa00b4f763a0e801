//! Minimum spanning tree using Kruskal's and Prim's algorithms.
//!
//! Both return a forest: a single spanning tree when the input is connected
//! (Kruskal) or when every vertex is reachable from the source (Prim).

use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{DisjointSet, FrontierEntry};
use crate::{Edge, Graph, GraphConfig, GraphError, Result, Vertex, Weight};

/// Result of MST computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// Selected edges, over the same vertex set as the input.
    pub tree: Graph,
    /// Total weight of the selected edges, saturating at `u64::MAX`.
    pub total_weight: Weight,
}

impl MstResult {
    fn new(tree: Graph) -> Self {
        Self {
            total_weight: tree.total_weight(),
            tree,
        }
    }

    /// Selected edges in the order they were chosen.
    pub fn edges(&self) -> &[Edge] {
        self.tree.edges()
    }

    pub fn edge_count(&self) -> usize {
        self.tree.edge_count()
    }

    /// Number of trees in the forest, isolated vertices included.
    pub fn tree_count(&self) -> usize {
        self.tree.vertex_count() - self.tree.edge_count()
    }

    /// Whether the selected edges connect every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count() == 1
    }
}

/// Compute a minimum spanning forest from an edge list using Kruskal's
/// algorithm.
///
/// Edges are sorted by weight (stable, so ties keep input order) and
/// accepted whenever their endpoints are still in different sets.
///
/// Time complexity: O(E log E) for sorting edges.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] if an edge names a vertex
/// `>= vertex_count`, or [`GraphError::CapacityExceeded`] if the input
/// exceeds the default [`GraphConfig`] limits.
#[instrument(skip_all, fields(vertices = vertex_count, edges = edges.len()))]
pub fn kruskal_mst(edges: &[Edge], vertex_count: usize) -> Result<MstResult> {
    let config = GraphConfig::default();
    if edges.len() > config.max_edges {
        return Err(GraphError::CapacityExceeded {
            what: "edge",
            limit: config.max_edges,
            actual: edges.len(),
        });
    }
    let forest = Graph::with_config(vertex_count, config)?;
    for edge in edges {
        forest.check_vertex(edge.from)?;
        forest.check_vertex(edge.to)?;
    }
    Ok(kruskal(edges, forest))
}

fn kruskal(edges: &[Edge], mut forest: Graph) -> MstResult {
    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|e| e.weight);

    let mut uf = DisjointSet::new(forest.vertex_count());
    for edge in sorted {
        if uf.set_count() <= 1 {
            break;
        }
        let r1 = uf.find(edge.from);
        let r2 = uf.find(edge.to);
        if r1 != r2 {
            uf.union(r1, r2);
            forest.push_edge(edge);
        }
    }

    let result = MstResult::new(forest);
    debug!(
        selected = result.edge_count(),
        total_weight = result.total_weight,
        trees = result.tree_count(),
        "kruskal complete"
    );
    result
}

impl Graph {
    /// Compute a minimum spanning forest of this graph using Kruskal's
    /// algorithm.
    ///
    /// Time complexity: O(E log E).
    #[instrument(skip_all, fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn kruskal_mst(&self) -> MstResult {
        kruskal(self.edges(), self.empty_like())
    }

    /// Compute the minimum spanning tree of `src`'s component using Prim's
    /// algorithm.
    ///
    /// Stale queue entries (vertices already in the tree) are skipped when
    /// popped. Vertices unreachable from `src` stay isolated in the result.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `src` is not a vertex.
    #[instrument(skip_all, fields(vertices = self.vertex_count(), src = src))]
    pub fn prim_mst(&self, src: Vertex) -> Result<MstResult> {
        self.check_vertex(src)?;

        let adjacency = self.adjacency();
        let mut tree = self.empty_like();
        let mut visited = vec![false; self.vertex_count()];
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry::root(src));

        while let Some(entry) = heap.pop() {
            if visited[entry.vertex] {
                continue;
            }
            visited[entry.vertex] = true;
            if let Some(parent) = entry.parent {
                tree.push_edge(Edge::new(parent, entry.vertex, entry.weight));
            }

            for half in &adjacency[entry.vertex] {
                if !visited[half.to] {
                    heap.push(FrontierEntry {
                        key: half.weight,
                        vertex: half.to,
                        parent: Some(entry.vertex),
                        weight: half.weight,
                    });
                }
            }
        }

        let result = MstResult::new(tree);
        debug!(
            selected = result.edge_count(),
            total_weight = result.total_weight,
            "prim complete"
        );
        Ok(result)
    }
}
