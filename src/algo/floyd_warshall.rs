//! Floyd-Warshall all-pairs shortest paths, `O(n^3)`.

use crate::graph::{DistanceMatrix, Graph};

use super::{ShortestPaths, Solution};

////////////////////////////////////////////////////////////////////////////////

pub struct FloydWarshall;

impl ShortestPaths for FloydWarshall {
    fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    fn all_pairs(&self, graph: &Graph) -> Solution {
        all_pairs(graph)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Negative cycles are not detected here: the solution never has
/// [`Solution::negative_cycle`] set, though some diagonal entries
/// of the result become negative.
pub fn all_pairs(graph: &Graph) -> Solution {
    let mut d = initial(graph);
    closure(&mut d);
    Solution {
        distances: d,
        negative_cycle: false,
    }
}

// zero diagonal, finite weights elsewhere
fn initial(graph: &Graph) -> DistanceMatrix {
    let n = graph.vertices();
    let mut d = DistanceMatrix::new(n);
    for i in 0..n {
        for j in 0..n {
            let w = graph.weight(i, j);
            if i == j {
                d.set(i, j, 0.);
            } else if w.is_finite() {
                d.set(i, j, w);
            }
        }
    }
    d
}

fn closure(d: &mut DistanceMatrix) {
    let n = d.size();
    // k must stay the outermost loop
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let w = d.sum_edge(i, k, j);
                if d.get(i, j) > w {
                    d.set(i, j, w);
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
