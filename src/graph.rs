//! Breadth-first and depth-first traversal over an adjacency list.
//!
//! Standalone utility; the partition solver does not use it.
//!
//! Both traversals are iterative. A vertex is marked visited at the moment
//! it is queued (BFS) or pushed (DFS), so each reachable vertex enters the
//! frontier exactly once. The DFS therefore yields stack pop order, which
//! differs from recursive pre-order on graphs with cross edges.

use std::collections::VecDeque;

/// Errors raised by graph construction and traversal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id is not in `0..vertex_count`.
    #[error("invalid argument: vertex {vertex} is outside 0..{vertex_count}")]
    UnknownVertex { vertex: usize, vertex_count: usize },
}

/// Directed graph stored as vertex id -> ordered neighbour ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); vertex_count],
        }
    }

    /// Build a directed graph from `(from, to)` pairs, in order.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Append `to` to the neighbour list of `from`.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;
        self.neighbors[from].push(to);
        Ok(())
    }

    /// Add `a -> b` and `b -> a`.
    pub fn add_undirected_edge(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        self.add_edge(a, b)?;
        if a != b {
            self.add_edge(b, a)?;
        }
        Ok(())
    }

    /// Neighbours of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize], GraphError> {
        self.check(vertex)?;
        Ok(&self.neighbors[vertex])
    }

    /// Vertices reachable from `root` in breadth-first (FIFO) order.
    pub fn bfs(&self, root: usize) -> Result<Vec<usize>, GraphError> {
        self.check(root)?;
        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut queue = VecDeque::new();
        visited[root] = true;
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &next in &self.neighbors[current] {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }
        Ok(order)
    }

    /// Vertices reachable from `root` in stack (LIFO) pop order.
    pub fn dfs(&self, root: usize) -> Result<Vec<usize>, GraphError> {
        self.check(root)?;
        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut stack = vec![root];
        visited[root] = true;

        while let Some(current) = stack.pop() {
            order.push(current);
            for &next in &self.neighbors[current] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
        Ok(order)
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
