//! Articulation points and bridges.
//!
//! - Articulation point: A vertex whose removal disconnects its component
//! - Bridge: An edge whose removal disconnects its component
//!
//! One depth-first search records each vertex's discovery time and low-link
//! value (the smallest discovery time reachable from its DFS subtree through
//! a single back edge). The search runs on an explicit stack so that depth is
//! bounded by heap memory rather than the call stack.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Graph, Vertex};

/// Result of articulation point and bridge analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiconnectedResult {
    /// Articulation points (cut vertices).
    pub articulation_points: BTreeSet<Vertex>,
    /// Bridges (cut edges) as `(parent, child)` DFS tree edges, in the order
    /// their subtrees finished.
    pub bridges: Vec<(Vertex, Vertex)>,
    /// Number of DFS roots, i.e. connected components.
    pub component_count: usize,
}

impl BiconnectedResult {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            articulation_points: BTreeSet::new(),
            bridges: Vec::new(),
            component_count: 0,
        }
    }

    /// Connected and without articulation points.
    #[must_use]
    pub fn is_biconnected(&self) -> bool {
        self.articulation_points.is_empty() && self.component_count <= 1
    }

    #[must_use]
    pub fn has_bridges(&self) -> bool {
        !self.bridges.is_empty()
    }
}

impl Default for BiconnectedResult {
    fn default() -> Self {
        Self::empty()
    }
}

/// A vertex whose adjacency list is partially explored.
#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: Vertex,
    parent: Option<Vertex>,
    /// Index of the next half-edge to examine.
    cursor: usize,
    /// Whether the tree edge back to `parent` has been skipped. Only one
    /// half-edge to the parent is the tree edge; others are parallel edges.
    parent_edge_skipped: bool,
}

/// Per-call DFS state.
struct LowLinkState {
    time: usize,
    visited: Vec<bool>,
    discovery: Vec<usize>,
    low: Vec<usize>,
    articulation_points: BTreeSet<Vertex>,
    bridges: Vec<(Vertex, Vertex)>,
    stack: Vec<Frame>,
}

impl LowLinkState {
    fn new(n: usize) -> Self {
        Self {
            time: 0,
            visited: vec![false; n],
            discovery: vec![0; n],
            low: vec![0; n],
            articulation_points: BTreeSet::new(),
            bridges: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn discover(&mut self, v: Vertex, parent: Option<Vertex>) {
        self.visited[v] = true;
        self.discovery[v] = self.time;
        self.low[v] = self.time;
        self.time += 1;
        self.stack.push(Frame {
            vertex: v,
            parent,
            cursor: 0,
            parent_edge_skipped: false,
        });
    }
}

impl Graph {
    /// Find articulation points and bridges in one pass.
    ///
    /// Every unvisited vertex starts a new DFS, so disconnected graphs are
    /// handled component by component.
    ///
    /// Time complexity: O(V + E)
    #[instrument(skip_all, fields(vertices = self.vertex_count(), edges = self.edge_count()))]
    pub fn articulation_points_and_bridges(&self) -> BiconnectedResult {
        if self.is_empty() {
            return BiconnectedResult::empty();
        }

        let mut state = LowLinkState::new(self.vertex_count());
        let mut component_count = 0;

        for root in 0..self.vertex_count() {
            if !state.visited[root] {
                component_count += 1;
                self.low_link_dfs(root, &mut state);
            }
        }

        debug!(
            articulation_points = state.articulation_points.len(),
            bridges = state.bridges.len(),
            components = component_count,
            "articulation analysis complete"
        );

        BiconnectedResult {
            articulation_points: state.articulation_points,
            bridges: state.bridges,
            component_count,
        }
    }

    /// Iterative DFS from `root`.
    fn low_link_dfs(&self, root: Vertex, state: &mut LowLinkState) {
        let adjacency = self.adjacency();
        // Tree children of this root; reset for every root.
        let mut root_children = 0;
        state.discover(root, None);

        while let Some(top) = state.stack.len().checked_sub(1) {
            let frame = state.stack[top];
            let src = frame.vertex;

            if let Some(half) = adjacency[src].get(frame.cursor) {
                state.stack[top].cursor += 1;
                let nbr = half.to;

                if !state.visited[nbr] {
                    if frame.parent.is_none() {
                        root_children += 1;
                    }
                    state.discover(nbr, Some(src));
                } else if frame.parent == Some(nbr) && !frame.parent_edge_skipped {
                    state.stack[top].parent_edge_skipped = true;
                } else {
                    // Back edge: discovery time, not low-link, of the neighbour.
                    state.low[src] = state.low[src].min(state.discovery[nbr]);
                }
                continue;
            }

            state.stack.pop();
            let Some(parent) = frame.parent else {
                continue;
            };

            if parent != root && state.low[src] >= state.discovery[parent] {
                state.articulation_points.insert(parent);
            }
            if state.low[src] > state.discovery[parent] {
                state.bridges.push((parent, src));
            }
            state.low[parent] = state.low[parent].min(state.low[src]);
        }

        if root_children > 1 {
            state.articulation_points.insert(root);
        }
    }

    /// Articulation points (cut vertices), ascending.
    pub fn articulation_points(&self) -> Vec<Vertex> {
        self.articulation_points_and_bridges()
            .articulation_points
            .into_iter()
            .collect()
    }

    /// Bridges (cut edges) as `(parent, child)` pairs.
    pub fn bridges(&self) -> Vec<(Vertex, Vertex)> {
        self.articulation_points_and_bridges().bridges
    }
}
