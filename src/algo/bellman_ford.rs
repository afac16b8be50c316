//! Bellman-Ford started from every vertex.
//!
//! Every source runs exactly `n - 1` full passes over all `n * n` arcs of the
//! dense matrix, so the whole computation is `O(n^4)`.

use crate::graph::{DistanceMatrix, Graph, WeightMatrix};

use super::{ShortestPaths, Solution};

////////////////////////////////////////////////////////////////////////////////

pub struct BellmanFord;

impl ShortestPaths for BellmanFord {
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn all_pairs(&self, graph: &Graph) -> Solution {
        all_pairs(graph)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Distances from every source, row `s` is the result of [`single_source`] for `s`.
///
/// After all rows are built every arc is checked once more against every row.
/// If some arc can still be relaxed the graph contains a negative cycle,
/// which is reported through [`Solution::negative_cycle`]. The matrix is returned as is.
pub fn all_pairs(graph: &Graph) -> Solution {
    let w = graph.weights();
    let rows = (0..graph.vertices())
        .map(|s| single_source(w, s))
        .collect();
    let distances = DistanceMatrix::from_rows(rows);
    let negative_cycle = distances.rows().any(|d| relaxable(w, d));
    Solution {
        distances,
        negative_cycle,
    }
}

/// Single-source Bellman-Ford over the dense weight matrix.
pub fn single_source(w: &WeightMatrix, source: usize) -> Vec<f64> {
    let n = w.size();
    let mut d = vec![f64::INFINITY; n];
    d[source] = 0.;
    for _ in 1..n {
        for u in 0..n {
            for v in 0..n {
                let through = d[u] + w.get(u, v);
                // ties are overwritten too
                if d[v] >= through {
                    d[v] = through;
                }
            }
        }
    }
    d
}

fn relaxable(w: &WeightMatrix, d: &[f64]) -> bool {
    let n = w.size();
    (0..n).any(|u| (0..n).any(|v| d[v] > d[u] + w.get(u, v)))
}

////////////////////////////////////////////////////////////////////////////////
