// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz target for raw edge-row validation.
//!
//! Arbitrary rows must either be rejected with an error or produce a graph
//! on which every algorithm runs without panicking.

use libfuzzer_sys::fuzz_target;
use weighted_graph::{edges_from_rows, kruskal_mst, Graph, GraphConfig};

fuzz_target!(|input: (u8, Vec<Vec<i64>>)| {
    let (vertex_count, rows) = input;
    let n = vertex_count as usize;

    let Ok(edges) = edges_from_rows(&rows) else {
        return;
    };
    let config = GraphConfig::new().max_edges(256);
    let Ok(graph) = Graph::from_edges_with_config(n, &edges, config) else {
        assert!(edges.len() > 256 || edges.iter().any(|e| e.from >= n || e.to >= n));
        return;
    };

    let _ = kruskal_mst(&edges, n).unwrap();
    if n > 0 {
        let _ = graph.prim_mst(0).unwrap();
        // Weights up to i64::MAX can still overflow a u64 path sum.
        let _ = graph.dijkstra(0);
    }
    let _ = graph.articulation_points_and_bridges();
});
