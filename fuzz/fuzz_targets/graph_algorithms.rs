// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz target for the spanning tree, shortest path and articulation
//! algorithms on graphs of various shapes.
//!
//! Checks the cross-algorithm invariants: Kruskal and Prim agree on total
//! weight for connected graphs, both Dijkstra staleness policies agree on
//! distances, and repeated runs are identical.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use weighted_graph::{
    build_graph, kruskal_mst, Edge, ShortestPathConfig, StalenessPolicy,
};

#[derive(Arbitrary, Debug)]
enum GraphShape {
    Chain { length: u8, weight: u8 },
    Star { spokes: u8 },
    Complete { size: u8 },
    Random { nodes: u8, edges: Vec<(u8, u8, u16)> },
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    shape: GraphShape,
    src: u8,
}

fn build_edges(shape: &GraphShape) -> (usize, Vec<Edge>) {
    match shape {
        GraphShape::Chain { length, weight } => {
            let len = (*length as usize).clamp(1, 200);
            let edges = (1..len)
                .map(|v| Edge::new(v - 1, v, u64::from(*weight)))
                .collect();
            (len, edges)
        }
        GraphShape::Star { spokes } => {
            let spoke_count = (*spokes as usize).clamp(1, 60);
            let edges = (1..=spoke_count)
                .map(|v| Edge::new(0, v, v as u64))
                .collect();
            (spoke_count + 1, edges)
        }
        GraphShape::Complete { size } => {
            let n = (*size as usize).clamp(1, 15);
            let mut edges = Vec::new();
            for i in 0..n {
                for j in i + 1..n {
                    edges.push(Edge::new(i, j, ((i * 31 + j * 17) % 23) as u64));
                }
            }
            (n, edges)
        }
        GraphShape::Random { nodes, edges } => {
            let n = (*nodes as usize).clamp(1, 50);
            let edges = edges
                .iter()
                .take(200)
                .map(|&(u, v, w)| Edge::new(u as usize % n, v as usize % n, u64::from(w)))
                .collect();
            (n, edges)
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    let (n, edges) = build_edges(&input.shape);
    let graph = build_graph(&edges, n).unwrap();
    let src = input.src as usize % n;

    let kruskal = kruskal_mst(&edges, n).unwrap();
    assert_eq!(kruskal, graph.kruskal_mst());
    assert_eq!(kruskal.edge_count() + kruskal.tree_count(), n);

    let prim = graph.prim_mst(src).unwrap();
    if kruskal.is_spanning_tree() {
        assert!(prim.is_spanning_tree());
        assert_eq!(prim.total_weight, kruskal.total_weight);
    }

    let visited = ShortestPathConfig::new().staleness(StalenessPolicy::VisitedSet);
    let a = graph.shortest_paths(src, &visited).unwrap();
    let b = graph.dijkstra(src).unwrap();
    assert_eq!(a.distance, b.distance);
    assert_eq!(prim.edge_count() + 1, a.reached_count());

    let cuts = graph.articulation_points_and_bridges();
    assert!(cuts.articulation_points.iter().all(|&v| v < n));
    assert_eq!(cuts.component_count, kruskal.tree_count());
    assert!(cuts.bridges.len() <= kruskal.edge_count());
    assert_eq!(cuts, graph.articulation_points_and_bridges());
});
