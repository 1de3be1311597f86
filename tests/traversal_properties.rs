use painter_partition::graph::AdjacencyList;
use proptest::prelude::*;

fn graph_strategy() -> impl Strategy<Value = (AdjacencyList, usize)> {
    (1usize..12).prop_flat_map(|n| {
        (
            proptest::collection::vec((0..n, 0..n), 0..30),
            0..n,
        )
            .prop_map(move |(edges, root)| {
                (AdjacencyList::from_edges(n, edges).unwrap(), root)
            })
    })
}

/// Hop distances from `root`, computed independently of `bfs`.
fn distances(g: &AdjacencyList, root: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; g.vertex_count()];
    dist[root] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for v in 0..g.vertex_count() {
            let Some(d) = dist[v] else { continue };
            for &w in g.neighbors(v).unwrap() {
                if dist[w].map_or(true, |dw| dw > d + 1) {
                    dist[w] = Some(d + 1);
                    changed = true;
                }
            }
        }
    }
    dist
}

#[test]
fn line_graph_orders() {
    let mut g = AdjacencyList::new(4);
    for v in 0..3 {
        g.add_undirected_edge(v, v + 1).unwrap();
    }
    assert_eq!(g.bfs(1).unwrap(), vec![1, 0, 2, 3]);
    assert_eq!(g.dfs(1).unwrap(), vec![1, 2, 3, 0]);
}

proptest! {
    #[test]
    fn both_traversals_visit_reachable_set_once((g, root) in graph_strategy()) {
        let dist = distances(&g, root);
        let reachable: Vec<usize> = (0..g.vertex_count()).filter(|&v| dist[v].is_some()).collect();
        for order in [g.bfs(root).unwrap(), g.dfs(root).unwrap()] {
            prop_assert_eq!(order[0], root);
            let mut sorted = order.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&sorted, &reachable);
        }
    }

    #[test]
    fn bfs_order_is_by_distance((g, root) in graph_strategy()) {
        let dist = distances(&g, root);
        let order = g.bfs(root).unwrap();
        for w in order.windows(2) {
            prop_assert!(dist[w[0]].unwrap() <= dist[w[1]].unwrap());
        }
    }
}
