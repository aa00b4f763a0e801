//! Single-source shortest paths using Dijkstra's algorithm.
//!
//! The binary heap has no decrease-key, so a vertex can be queued several
//! times. Two policies decide which popped entries are stale:
//!
//! - [`StalenessPolicy::VisitedSet`] finalizes a vertex the first time it is
//!   popped and ignores every later entry for it.
//! - [`StalenessPolicy::DistanceCheck`] keeps no visited set and ignores an
//!   entry whose weight-so-far is worse than the best known distance.
//!
//! Both yield identical distances. Edge weights are non-negative by
//! construction of [`Graph`].

use std::{cmp::Reverse, collections::BinaryHeap};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::FrontierEntry;
use crate::{Edge, Graph, GraphError, Result, Vertex, Weight};

/// How stale priority-queue entries are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StalenessPolicy {
    /// Skip entries for vertices that were already finalized.
    VisitedSet,
    /// Skip entries whose weight-so-far exceeds the vertex's best distance.
    #[default]
    DistanceCheck,
}

/// Configuration for shortest-path computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortestPathConfig {
    pub staleness: StalenessPolicy,
    /// Whether to build the shortest-path tree as a [`Graph`].
    pub build_tree: bool,
}

impl Default for ShortestPathConfig {
    fn default() -> Self {
        Self {
            staleness: StalenessPolicy::default(),
            build_tree: true,
        }
    }
}

impl ShortestPathConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn staleness(mut self, staleness: StalenessPolicy) -> Self {
        self.staleness = staleness;
        self
    }

    #[must_use]
    pub const fn build_tree(mut self, build: bool) -> Self {
        self.build_tree = build;
        self
    }
}

/// Result of a single-source shortest-path computation.
///
/// `distance[v]` and `parent[v]` are `None` for vertices unreachable from
/// `source`; `parent[source]` is always `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult {
    pub source: Vertex,
    pub distance: Vec<Option<Weight>>,
    pub parent: Vec<Option<Vertex>>,
    /// Shortest-path tree rooted at `source`, if requested.
    pub tree: Option<Graph>,
}

impl ShortestPathResult {
    #[must_use]
    pub fn distance_to(&self, v: Vertex) -> Option<Weight> {
        self.distance.get(v).copied().flatten()
    }

    #[must_use]
    pub fn is_reachable(&self, v: Vertex) -> bool {
        self.distance_to(v).is_some()
    }

    /// Number of vertices reachable from the source, the source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.distance.iter().filter(|d| d.is_some()).count()
    }

    /// Vertices on the shortest path from the source to `target`, both ends
    /// included, or `None` if `target` is unreachable or the parent chain
    /// does not lead back to the source.
    #[must_use]
    pub fn path_to(&self, target: Vertex) -> Option<Vec<Vertex>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.parent.get(current).copied().flatten() {
            if path.len() > self.parent.len() {
                return None;
            }
            path.push(p);
            current = p;
        }
        (current == self.source).then(|| {
            path.reverse();
            path
        })
    }
}

impl Graph {
    /// Shortest paths from `src` with the default configuration
    /// ([`StalenessPolicy::DistanceCheck`], tree built).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `src` is not a vertex, or
    /// [`GraphError::WeightOverflow`] if a vertex is reachable only along
    /// paths whose weight exceeds `u64::MAX`.
    pub fn dijkstra(&self, src: Vertex) -> Result<ShortestPathResult> {
        self.shortest_paths(src, &ShortestPathConfig::default())
    }

    /// Shortest paths from `src` using Dijkstra's algorithm.
    ///
    /// Time complexity: O(E log E).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `src` is not a vertex, or
    /// [`GraphError::WeightOverflow`] if a vertex is reachable only along
    /// paths whose weight exceeds `u64::MAX`.
    #[instrument(skip_all, fields(vertices = self.vertex_count(), src = src, staleness = ?config.staleness))]
    pub fn shortest_paths(
        &self,
        src: Vertex,
        config: &ShortestPathConfig,
    ) -> Result<ShortestPathResult> {
        self.check_vertex(src)?;

        let result = match config.staleness {
            StalenessPolicy::VisitedSet => self.dijkstra_visited(src, config.build_tree)?,
            StalenessPolicy::DistanceCheck => self.dijkstra_relaxed(src, config.build_tree)?,
        };

        debug!(reached = result.reached_count(), "dijkstra complete");
        Ok(result)
    }

    /// Finalize on first pop; tree edges are added as vertices are finalized.
    fn dijkstra_visited(&self, src: Vertex, build_tree: bool) -> Result<ShortestPathResult> {
        let n = self.vertex_count();
        let adjacency = self.adjacency();
        let mut visited = vec![false; n];
        let mut distance = vec![None; n];
        let mut parent = vec![None; n];
        let mut tree = build_tree.then(|| self.empty_like());

        let mut overflowed = Vec::new();
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry::root(src));

        while let Some(entry) = heap.pop() {
            let v = entry.vertex;
            if visited[v] {
                continue;
            }
            visited[v] = true;
            distance[v] = Some(entry.key);
            parent[v] = entry.parent;
            if let (Some(tree), Some(p)) = (tree.as_mut(), entry.parent) {
                tree.push_edge(Edge::new(p, v, entry.weight));
            }

            for half in &adjacency[v] {
                if visited[half.to] {
                    continue;
                }
                let Some(key) = entry.key.checked_add(half.weight) else {
                    overflowed.push(half.to);
                    continue;
                };
                heap.push(FrontierEntry {
                    key,
                    vertex: half.to,
                    parent: Some(v),
                    weight: half.weight,
                });
            }
        }

        check_overflow(&overflowed, &distance)?;
        Ok(ShortestPathResult {
            source: src,
            distance,
            parent,
            tree,
        })
    }

    /// No visited set; relax on improvement and skip entries worse than the
    /// recorded distance. The tree is assembled from the final parents.
    fn dijkstra_relaxed(&self, src: Vertex, build_tree: bool) -> Result<ShortestPathResult> {
        let n = self.vertex_count();
        let adjacency = self.adjacency();
        let mut distance: Vec<Option<Weight>> = vec![None; n];
        let mut parent = vec![None; n];

        let mut overflowed = Vec::new();

        distance[src] = Some(0);
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0, src)));

        while let Some(Reverse((wsf, v))) = heap.pop() {
            if distance[v].is_some_and(|best| wsf > best) {
                continue;
            }

            for half in &adjacency[v] {
                let Some(candidate) = wsf.checked_add(half.weight) else {
                    overflowed.push(half.to);
                    continue;
                };
                if distance[half.to].map_or(true, |best| candidate < best) {
                    distance[half.to] = Some(candidate);
                    parent[half.to] = Some(v);
                    heap.push(Reverse((candidate, half.to)));
                }
            }
        }

        check_overflow(&overflowed, &distance)?;
        let tree = build_tree.then(|| {
            let mut tree = self.empty_like();
            for (v, p) in parent.iter().enumerate() {
                let Some(p) = *p else { continue };
                if let (Some(dv), Some(dp)) = (distance[v], distance[p]) {
                    tree.push_edge(Edge::new(p, v, dv - dp));
                }
            }
            tree
        });

        Ok(ShortestPathResult {
            source: src,
            distance,
            parent,
            tree,
        })
    }
}

/// An overflowing candidate counts as infinite. It is only an error when no
/// representable path reached the vertex either.
fn check_overflow(overflowed: &[Vertex], distance: &[Option<Weight>]) -> Result<()> {
    match overflowed.iter().find(|&&v| distance[v].is_none()) {
        Some(&vertex) => Err(GraphError::WeightOverflow { vertex }),
        None => Ok(()),
    }
}
