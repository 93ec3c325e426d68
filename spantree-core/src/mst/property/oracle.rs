//! Dense minimum-spanning-forest oracle.
//!
//! Collapses parallel edges into an adjacency matrix holding the cheapest
//! weight per pair, then runs the textbook `O(n²)` array-based Prim from
//! every unvisited vertex. It shares no code with the implementations under
//! test.

/// Result of the oracle.
#[derive(Clone, Debug)]
pub(super) struct ForestSummary {
    pub total_weight: f64,
    pub edge_count: usize,
    pub component_count: usize,
}

impl ForestSummary {
    pub(super) const fn is_connected(&self) -> bool {
        self.component_count <= 1
    }
}

/// Computes the minimum spanning forest of `vertex_count` vertices.
///
/// Self-loops, out-of-range endpoints and non-finite weights are ignored.
pub(super) fn minimum_spanning_forest(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> ForestSummary {
    let mut matrix = vec![vec![f64::INFINITY; vertex_count]; vertex_count];
    for &(u, v, weight) in edges {
        if u == v || u >= vertex_count || v >= vertex_count || !weight.is_finite() {
            continue;
        }
        if weight < matrix[u][v] {
            matrix[u][v] = weight;
            matrix[v][u] = weight;
        }
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best = vec![f64::INFINITY; vertex_count];
    let mut summary = ForestSummary {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };

    for root in 0..vertex_count {
        if in_tree[root] {
            continue;
        }
        summary.component_count += 1;
        best[root] = 0.0;
        loop {
            let next = (0..vertex_count)
                .filter(|&vertex| !in_tree[vertex] && best[vertex].is_finite())
                .min_by(|&a, &b| best[a].total_cmp(&best[b]));
            let Some(vertex) = next else { break };
            in_tree[vertex] = true;
            if vertex != root {
                summary.total_weight += best[vertex];
                summary.edge_count += 1;
            }
            for other in 0..vertex_count {
                if !in_tree[other] && matrix[vertex][other] < best[other] {
                    best[other] = matrix[vertex][other];
                }
            }
        }
    }
    summary
}
