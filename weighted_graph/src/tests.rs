use std::collections::BTreeSet;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use super::*;

fn random_edges(rng: &mut StdRng, n: usize, m: usize, max_weight: Weight) -> Vec<Edge> {
    (0..m)
        .map(|_| {
            Edge::new(
                rng.gen_range(0..n),
                rng.gen_range(0..n),
                rng.gen_range(0..=max_weight),
            )
        })
        .collect()
}

/// Connected graph: a random spanning tree plus `extra` random edges, all
/// weights distinct.
fn random_connected_edges(rng: &mut StdRng, n: usize, extra: usize) -> Vec<Edge> {
    let mut edges: Vec<Edge> = (1..n)
        .map(|v| Edge::new(rng.gen_range(0..v), v, 0))
        .collect();
    edges.extend(random_edges(rng, n, extra, 0));

    let mut weights: Vec<Weight> = (1..=edges.len() as Weight).collect();
    weights.shuffle(rng);
    for (edge, w) in edges.iter_mut().zip(weights) {
        edge.weight = w;
    }
    edges
}

fn component_count(n: usize, edges: impl Iterator<Item = Edge>, removed: Option<Vertex>) -> usize {
    let mut uf = DisjointSet::new(n);
    for e in edges {
        if removed == Some(e.from) || removed == Some(e.to) {
            continue;
        }
        let (r1, r2) = (uf.find(e.from), uf.find(e.to));
        if r1 != r2 {
            uf.union(r1, r2);
        }
    }
    uf.set_count() - usize::from(removed.is_some())
}

fn is_forest(n: usize, edges: &[Edge]) -> bool {
    let mut uf = DisjointSet::new(n);
    edges.iter().all(|e| {
        let (r1, r2) = (uf.find(e.from), uf.find(e.to));
        if r1 == r2 {
            return false;
        }
        uf.union(r1, r2);
        true
    })
}

/// Minimum weight over every (n-1)-subset of edges that forms a spanning tree.
fn brute_force_mst_weight(n: usize, edges: &[Edge]) -> Option<Weight> {
    fn search(
        n: usize,
        edges: &[Edge],
        start: usize,
        chosen: &mut Vec<Edge>,
        best: &mut Option<Weight>,
    ) {
        if chosen.len() == n - 1 {
            if is_forest(n, chosen) {
                let w: Weight = chosen.iter().map(|e| e.weight).sum();
                *best = Some(best.map_or(w, |b: Weight| b.min(w)));
            }
            return;
        }
        for i in start..edges.len() {
            chosen.push(edges[i]);
            search(n, edges, i + 1, chosen, best);
            chosen.pop();
        }
    }

    let mut best = None;
    search(n, edges, 0, &mut Vec::new(), &mut best);
    best
}

/// Bellman-Ford over the undirected edge list.
fn reference_distances(n: usize, edges: &[Edge], src: Vertex) -> Vec<Option<Weight>> {
    let mut dist = vec![None; n];
    dist[src] = Some(0);
    for _ in 0..n {
        for e in edges {
            for (a, b) in [(e.from, e.to), (e.to, e.from)] {
                if let Some(da) = dist[a] {
                    let candidate: Weight = da + e.weight;
                    if dist[b].map_or(true, |db| candidate < db) {
                        dist[b] = Some(candidate);
                    }
                }
            }
        }
    }
    dist
}

#[test]
fn kruskal_matches_brute_force_on_complete_graph() {
    let edges = [
        Edge::new(0, 1, 10),
        Edge::new(0, 2, 6),
        Edge::new(0, 3, 5),
        Edge::new(1, 2, 4),
        Edge::new(1, 3, 15),
        Edge::new(2, 3, 8),
    ];

    let result = kruskal_mst(&edges, 4).unwrap();
    assert_eq!(result.edge_count(), 3);
    assert!(is_forest(4, result.edges()));
    assert_eq!(Some(result.total_weight), brute_force_mst_weight(4, &edges));
    assert_eq!(result.total_weight, 15);
}

#[test]
fn kruskal_matches_brute_force_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..40 {
        let n = rng.gen_range(2..=6);
        let extra = rng.gen_range(0..=5);
        let edges = random_connected_edges(&mut rng, n, extra);

        let result = kruskal_mst(&edges, n).unwrap();
        assert!(result.is_spanning_tree());
        assert_eq!(result.edge_count(), n - 1);
        assert_eq!(Some(result.total_weight), brute_force_mst_weight(n, &edges));
    }
}

#[test]
fn kruskal_output_is_forest_on_disconnected_graphs() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let n = rng.gen_range(1..=12);
        let m = rng.gen_range(0..=15);
        let edges = random_edges(&mut rng, n, m, 20);

        let result = kruskal_mst(&edges, n).unwrap();
        assert!(is_forest(n, result.edges()));
        assert_eq!(
            result.tree_count(),
            component_count(n, edges.iter().copied(), None)
        );
    }
}

#[test]
fn prim_and_kruskal_agree_on_distinct_weights() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let n = rng.gen_range(1..=20);
        let extra = rng.gen_range(0..=30);
        let edges = random_connected_edges(&mut rng, n, extra);
        let graph = build_graph(&edges, n).unwrap();

        let kruskal = graph.kruskal_mst();
        let prim = graph.prim_mst(rng.gen_range(0..n)).unwrap();

        assert_eq!(prim.total_weight, kruskal.total_weight);
        assert!(prim.is_spanning_tree());
        assert!(is_forest(n, prim.edges()));

        // Distinct weights make the MST unique.
        let as_set = |r: &MstResult| -> BTreeSet<(Vertex, Vertex, Weight)> {
            r.edges()
                .iter()
                .map(|e| (e.from.min(e.to), e.from.max(e.to), e.weight))
                .collect()
        };
        assert_eq!(as_set(&prim), as_set(&kruskal));
    }
}

#[test]
fn dijkstra_variants_agree() {
    let mut rng = StdRng::seed_from_u64(42);
    let visited = ShortestPathConfig::new().staleness(StalenessPolicy::VisitedSet);
    let relaxed = ShortestPathConfig::new().staleness(StalenessPolicy::DistanceCheck);

    for _ in 0..100 {
        let n = rng.gen_range(1..=15);
        let m = rng.gen_range(0..=40);
        let edges = random_edges(&mut rng, n, m, 9);
        let graph = build_graph(&edges, n).unwrap();
        let src = rng.gen_range(0..n);

        let a = graph.shortest_paths(src, &visited).unwrap();
        let b = graph.shortest_paths(src, &relaxed).unwrap();

        assert_eq!(a.distance, b.distance);
        assert_eq!(a.distance, reference_distances(n, &edges, src));
        // Ties may pick different parents, but both trees span the reached set.
        let reached = a.reached_count();
        assert_eq!(a.tree.as_ref().map(Graph::edge_count), Some(reached - 1));
        assert_eq!(b.tree.as_ref().map(Graph::edge_count), Some(reached - 1));
    }
}

#[test]
fn dijkstra_parents_form_shortest_paths() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..30 {
        let n = rng.gen_range(2..=12);
        let m = rng.gen_range(0..=25);
        let edges = random_edges(&mut rng, n, m, 9);
        let graph = build_graph(&edges, n).unwrap();
        let result = graph.dijkstra(0).unwrap();

        for v in 0..n {
            let Some(path) = result.path_to(v) else {
                assert!(result.distance[v].is_none());
                continue;
            };
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&v));

            // Each hop must be an edge whose weight closes the distance gap.
            for hop in path.windows(2) {
                let (u, w) = (hop[0], hop[1]);
                let gap = result.distance[w].unwrap() - result.distance[u].unwrap();
                assert!(graph
                    .neighbors(u)
                    .unwrap()
                    .iter()
                    .any(|h| h.to == w && h.weight == gap));
            }
        }
    }
}

#[test]
fn articulation_points_match_vertex_removal() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..60 {
        let n = rng.gen_range(1..=10);
        let m = rng.gen_range(0..=14);
        let edges = random_edges(&mut rng, n, m, 1);
        let graph = build_graph(&edges, n).unwrap();
        let result = graph.articulation_points_and_bridges();

        let base = component_count(n, edges.iter().copied(), None);
        assert_eq!(result.component_count, base);

        let expected: BTreeSet<Vertex> = (0..n)
            .filter(|&v| component_count(n, edges.iter().copied(), Some(v)) > base)
            .collect();
        assert_eq!(result.articulation_points, expected, "edges {edges:?}");
    }
}

#[test]
fn bridges_match_edge_removal() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..60 {
        let n = rng.gen_range(1..=10);
        let m = rng.gen_range(0..=14);
        let edges = random_edges(&mut rng, n, m, 1);
        let graph = build_graph(&edges, n).unwrap();
        let result = graph.articulation_points_and_bridges();

        let base = component_count(n, edges.iter().copied(), None);
        let expected: BTreeSet<(Vertex, Vertex)> = (0..edges.len())
            .filter(|&i| {
                let rest = edges
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, e)| *e);
                component_count(n, rest, None) > base
            })
            .map(|i| (edges[i].from.min(edges[i].to), edges[i].from.max(edges[i].to)))
            .collect();

        let found: BTreeSet<(Vertex, Vertex)> = result
            .bridges
            .iter()
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        assert_eq!(found.len(), result.bridges.len());
        assert_eq!(found, expected, "edges {edges:?}");
    }
}

#[test]
fn algorithms_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let edges = random_edges(&mut rng, 12, 30, 50);
    let graph = build_graph(&edges, 12).unwrap();
    let snapshot = graph.clone();

    assert_eq!(graph.kruskal_mst(), graph.kruskal_mst());
    assert_eq!(kruskal_mst(&edges, 12).unwrap(), kruskal_mst(&edges, 12).unwrap());
    assert_eq!(graph.prim_mst(4).unwrap(), graph.prim_mst(4).unwrap());
    assert_eq!(graph.dijkstra(4).unwrap(), graph.dijkstra(4).unwrap());
    let visited = ShortestPathConfig::new().staleness(StalenessPolicy::VisitedSet);
    assert_eq!(
        graph.shortest_paths(4, &visited).unwrap(),
        graph.shortest_paths(4, &visited).unwrap()
    );
    assert_eq!(
        graph.articulation_points_and_bridges(),
        graph.articulation_points_and_bridges()
    );

    assert_eq!(graph, snapshot);
}

#[test]
fn hand_computed_fixtures() {
    // Path 0-1-2-3: both internal vertices cut, every edge a bridge.
    let path = build_graph(
        &[Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(2, 3, 1)],
        4,
    )
    .unwrap();
    let result = path.articulation_points_and_bridges();
    assert_eq!(result.articulation_points, BTreeSet::from([1, 2]));
    assert_eq!(result.bridges.len(), 3);

    // Cycle 0-1-2-3-0: nothing to cut.
    let cycle = build_graph(
        &[
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 2),
            Edge::new(2, 3, 3),
            Edge::new(3, 0, 4),
        ],
        4,
    )
    .unwrap();
    let result = cycle.articulation_points_and_bridges();
    assert!(result.articulation_points.is_empty());
    assert!(result.bridges.is_empty());

    // 3 is cheaper directly over 3-0 (4) than via 0-1-2-3 (6).
    assert_eq!(
        cycle.dijkstra(0).unwrap().distance,
        vec![Some(0), Some(1), Some(3), Some(4)]
    );
}

#[test]
fn rows_feed_kruskal() {
    let rows: Vec<[i64; 3]> = vec![[0, 1, 4], [1, 2, 1], [0, 2, 3]];
    let edges = edges_from_rows(&rows).unwrap();
    assert_eq!(kruskal_mst(&edges, 3).unwrap().total_weight, 4);

    let bad: Vec<[i64; 3]> = vec![[0, 1, 4], [1, 2, -1]];
    assert!(matches!(
        edges_from_rows(&bad),
        Err(GraphError::NegativeWeight { index: 1, .. })
    ));
}

#[test]
fn algorithms_emit_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("weighted_graph=debug")
        .with_test_writer()
        .try_init();

    let graph = build_graph(&[Edge::new(0, 1, 2), Edge::new(1, 2, 3)], 3).unwrap();
    assert_eq!(graph.kruskal_mst().total_weight, 5);
    assert_eq!(graph.prim_mst(0).unwrap().total_weight, 5);
    assert_eq!(graph.dijkstra(0).unwrap().distance_to(2), Some(5));
    assert_eq!(graph.articulation_points(), vec![1]);
}
