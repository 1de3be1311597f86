//! Example: breadth-first and depth-first visit orders.
//!
//! Run with:
//! `cargo run --example traversal`

use painter_partition::graph::{AdjacencyList, GraphError};

fn main() -> Result<(), GraphError> {
    let mut graph = AdjacencyList::new(7);
    for (a, b) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (4, 6)] {
        graph.add_undirected_edge(a, b)?;
    }

    println!("BFS from 0: {:?}", graph.bfs(0)?);
    println!("DFS from 0: {:?}", graph.dfs(0)?);
    Ok(())
}
