//! Classical algorithms over weighted undirected graphs.
//!
//! Vertices are dense indices in `[0, N)`. A [`Graph`] stores every
//! undirected edge twice, once as a [`HalfEdge`] at each endpoint, and is
//! never mutated by the algorithms that read it:
//!
//! - Minimum spanning trees via Kruskal ([`kruskal_mst`]) and Prim ([`Graph::prim_mst`])
//! - Single-source shortest paths via Dijkstra ([`Graph::dijkstra`])
//! - Articulation points and bridges ([`Graph::articulation_points_and_bridges`])

#![allow(clippy::module_name_repetitions)] // `GraphConfig`, `GraphError` read better than `Config`, `Error`
#![allow(clippy::must_use_candidate)] // Accessors are self-evidently pure

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod algorithms;
mod config;
mod error;

pub use algorithms::{
    kruskal_mst, BiconnectedResult, DisjointSet, MstResult, ShortestPathConfig,
    ShortestPathResult, StalenessPolicy,
};
pub use config::GraphConfig;
pub use error::{GraphError, Result};

/// Dense vertex index.
pub type Vertex = usize;

/// Non-negative edge weight.
pub type Weight = u64;

/// An undirected weighted edge `(from, to, weight)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
    pub weight: Weight,
}

impl Edge {
    #[must_use]
    pub const fn new(from: Vertex, to: Vertex, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// Parse a raw `[from, to, weight]` row.
    ///
    /// `index` is the row's position in its list and is only used for
    /// error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedEdge`] unless the row has exactly three
    /// fields, [`GraphError::NegativeVertex`] for a negative endpoint and
    /// [`GraphError::NegativeWeight`] for a negative weight.
    pub fn try_from_row(index: usize, row: &[i64]) -> Result<Self> {
        let &[from, to, weight] = row else {
            return Err(GraphError::MalformedEdge {
                index,
                len: row.len(),
            });
        };

        let vertex = |v: i64| {
            usize::try_from(v).map_err(|_| GraphError::NegativeVertex { index, vertex: v })
        };
        let from = vertex(from)?;
        let to = vertex(to)?;
        let weight =
            Weight::try_from(weight).map_err(|_| GraphError::NegativeWeight { index, weight })?;

        Ok(Self { from, to, weight })
    }

    /// The endpoint opposite `v`.
    #[must_use]
    pub const fn other(&self, v: Vertex) -> Vertex {
        if self.from == v {
            self.to
        } else {
            self.from
        }
    }

    const fn half_edges(&self) -> (HalfEdge, HalfEdge) {
        (
            HalfEdge {
                to: self.to,
                weight: self.weight,
            },
            HalfEdge {
                to: self.from,
                weight: self.weight,
            },
        )
    }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    fn from((from, to, weight): (Vertex, Vertex, Weight)) -> Self {
        Self::new(from, to, weight)
    }
}

/// Parse a list of raw `[from, to, weight]` rows, failing on the first bad row.
///
/// # Errors
///
/// See [`Edge::try_from_row`].
pub fn edges_from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Vec<Edge>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| Edge::try_from_row(index, row.as_ref()))
        .collect()
}

/// One endpoint's view of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HalfEdge {
    pub to: Vertex,
    pub weight: Weight,
}

/// Adjacency-list storage of an undirected weighted graph.
///
/// If half-edge `(v, w)` is stored at `u`, half-edge `(u, w)` is stored at `v`.
///
/// Serializes as its vertex count and edge list. Deserializing rebuilds the
/// adjacency through [`Graph::from_edges`], so malformed input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EdgeList", try_from = "EdgeList")]
pub struct Graph {
    adjacency: Vec<Vec<HalfEdge>>,
    /// Undirected edges in insertion order.
    edges: Vec<Edge>,
    config: GraphConfig,
}

/// Wire form of a [`Graph`].
#[derive(Serialize, Deserialize)]
struct EdgeList {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl From<Graph> for EdgeList {
    fn from(graph: Graph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges,
        }
    }
}

impl TryFrom<EdgeList> for Graph {
    type Error = GraphError;

    fn try_from(list: EdgeList) -> Result<Self> {
        Self::from_edges(list.vertex_count, &list.edges)
    }
}

impl Graph {
    /// Create a graph with `vertex_count` isolated vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if `vertex_count` exceeds the
    /// default [`GraphConfig`] limit.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_config(vertex_count, GraphConfig::default())
    }

    /// Create a graph with `vertex_count` isolated vertices under `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::CapacityExceeded`] if `vertex_count` exceeds
    /// `config.max_vertices`.
    pub fn with_config(vertex_count: usize, config: GraphConfig) -> Result<Self> {
        if vertex_count > config.max_vertices {
            return Err(GraphError::CapacityExceeded {
                what: "vertex",
                limit: config.max_vertices,
                actual: vertex_count,
            });
        }
        Ok(Self::blank(vertex_count, config))
    }

    /// Build a graph from an edge list. O(V + E).
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is out of range or a limit is exceeded.
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> Result<Self> {
        Self::from_edges_with_config(vertex_count, edges, GraphConfig::default())
    }

    /// Build a graph from an edge list under `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is out of range or a limit is exceeded.
    pub fn from_edges_with_config(
        vertex_count: usize,
        edges: &[Edge],
        config: GraphConfig,
    ) -> Result<Self> {
        if edges.len() > config.max_edges {
            return Err(GraphError::CapacityExceeded {
                what: "edge",
                limit: config.max_edges,
                actual: edges.len(),
            });
        }
        let mut graph = Self::with_config(vertex_count, config)?;
        graph.edges.reserve(edges.len());
        for edge in edges {
            graph.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Same vertex set, no edges, no limit checks. Used for algorithm output.
    pub(crate) fn blank(vertex_count: usize, config: GraphConfig) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
            config,
        }
    }

    /// An edgeless graph over the same vertices, sharing this graph's limits.
    pub(crate) fn empty_like(&self) -> Self {
        Self::blank(self.vertex_count(), self.config)
    }

    /// Append the undirected edge `u - v` with weight `w`. O(1) amortized.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for a bad endpoint, or
    /// [`GraphError::CapacityExceeded`] once `max_edges` is reached.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex, w: Weight) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if self.edges.len() >= self.config.max_edges {
            return Err(GraphError::CapacityExceeded {
                what: "edge",
                limit: self.config.max_edges,
                actual: self.edges.len() + 1,
            });
        }
        self.push_edge(Edge::new(u, v, w));
        Ok(())
    }

    /// Insert an edge whose endpoints are already known to be in range.
    pub(crate) fn push_edge(&mut self, edge: Edge) {
        let (at_from, at_to) = edge.half_edges();
        self.adjacency[edge.from].push(at_from);
        self.adjacency[edge.to].push(at_to);
        self.edges.push(edge);
    }

    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `v >= vertex_count()`.
    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if v < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.adjacency.len(),
            })
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each stored as two half-edges).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Half-edges leaving `v`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if `v` is not a vertex.
    pub fn neighbors(&self, v: Vertex) -> Result<&[HalfEdge]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    pub(crate) fn adjacency(&self) -> &[Vec<HalfEdge>] {
        &self.adjacency
    }

    /// Every undirected edge exactly once, in insertion order and with the
    /// orientation it was added in.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of all edge weights, saturating at `u64::MAX`.
    pub fn total_weight(&self) -> Weight {
        self.edges
            .iter()
            .fold(0, |acc: Weight, e| acc.saturating_add(e.weight))
    }
}

/// Renders one line per vertex: `u -> (v, w) (v, w) `.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, half_edges) in self.adjacency.iter().enumerate() {
            write!(f, "{u} -> ")?;
            for h in half_edges {
                write!(f, "({}, {}) ", h.to, h.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build a graph with `vertex_count` vertices from an edge list.
///
/// # Errors
///
/// Returns an error if an endpoint is out of range or a limit is exceeded.
pub fn build_graph(edges: &[Edge], vertex_count: usize) -> Result<Graph> {
    Graph::from_edges(vertex_count, edges)
}

#[cfg(test)]
mod tests;
