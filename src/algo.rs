pub mod bellman_ford;

pub mod compare;

pub mod floyd_warshall;

////////////////////////////////////////////////////////////////////////////////

pub use bellman_ford::BellmanFord;

pub use floyd_warshall::FloydWarshall;

use crate::graph::{DistanceMatrix, Graph};

////////////////////////////////////////////////////////////////////////////////

/// Result of an all-pairs computation.
#[derive(Clone, Debug)]
pub struct Solution {
    pub distances: DistanceMatrix,

    /// Set when the algorithm noticed that some distance can still be improved
    /// after it finished, which means a negative cycle. The distances are
    /// unreliable in that case.
    pub negative_cycle: bool,
}

////////////////////////////////////////////////////////////////////////////////

/// All-pairs shortest path algorithm.
///
/// Implementations only borrow the graph and allocate a fresh matrix on every call.
pub trait ShortestPaths {
    fn name(&self) -> &'static str;

    fn all_pairs(&self, graph: &Graph) -> Solution;
}

////////////////////////////////////////////////////////////////////////////////
