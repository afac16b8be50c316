use crate::error::{Error, Result};

use super::matrix::WeightMatrix;

////////////////////////////////////////////////////////////////////////////////

/// Directed weighted edge, indices are interpreted according to [`IndexBase`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub sink: usize,
    pub weight: f64,
}

impl Edge {
    pub fn new(source: usize, sink: usize, weight: f64) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Numbering of vertices in the edge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexBase {
    /// Vertices are `0..n`.
    Zero,
    /// Vertices are `1..=n`, as in input files.
    One,
}

impl IndexBase {
    fn normalize(self, index: usize, vertices: usize) -> Option<usize> {
        let index = match self {
            IndexBase::Zero => index,
            IndexBase::One => index.checked_sub(1)?,
        };
        (index < vertices).then_some(index)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Graph with fixed vertex count and dense weight matrix.
///
/// Built once from input and then only borrowed by the algorithms.
#[derive(Clone, Debug)]
pub struct Graph {
    weights: WeightMatrix,
}

impl Graph {
    pub fn new(vertices: usize) -> Self {
        Self {
            weights: WeightMatrix::new(vertices),
        }
    }

    /// Builds graph from the edge list.
    /// If the same ordered pair appears more than once, the last edge wins.
    pub fn from_edges(
        vertices: usize,
        edges: impl IntoIterator<Item = Edge>,
        base: IndexBase,
    ) -> Result<Self> {
        let mut graph = Self::new(vertices);
        for edge in edges {
            graph.set_edge(edge, base)?;
        }
        Ok(graph)
    }

    pub fn set_edge(&mut self, edge: Edge, base: IndexBase) -> Result<()> {
        let vertices = self.vertices();
        let out_of_range = || Error::VertexOutOfRange {
            from: edge.source,
            to: edge.sink,
            vertices,
        };
        let from = base
            .normalize(edge.source, vertices)
            .ok_or_else(out_of_range)?;
        let to = base.normalize(edge.sink, vertices).ok_or_else(out_of_range)?;
        self.weights.set(from, to, edge.weight);
        Ok(())
    }

    pub fn vertices(&self) -> usize {
        self.weights.size()
    }

    pub fn weights(&self) -> &WeightMatrix {
        &self.weights
    }

    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights.get(from, to)
    }

    /// Number of ordered pairs connected by an edge.
    pub fn edge_count(&self) -> usize {
        self.weights
            .rows()
            .flatten()
            .filter(|w| w.is_finite())
            .count()
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::{Edge, Graph, IndexBase};

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn one_based() {
        let g = Graph::from_edges(
            3,
            [Edge::new(1, 2, 4.), Edge::new(3, 1, -2.), Edge::new(2, 2, 0.)],
            IndexBase::One,
        )
        .unwrap();

        assert_eq!(g.vertices(), 3);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.weight(0, 1), 4.);
        assert_eq!(g.weight(2, 0), -2.);
        assert_eq!(g.weight(1, 1), 0.);

        // diagonal is not implicitly zero
        assert_eq!(g.weight(0, 0), f64::INFINITY);
        assert_eq!(g.weight(1, 0), f64::INFINITY);
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn zero_based() {
        let g = Graph::from_edges(2, [Edge::new(0, 1, 7.)], IndexBase::Zero).unwrap();
        assert_eq!(g.weight(0, 1), 7.);
        assert_eq!(g.edge_count(), 1);

        let result = Graph::from_edges(2, [Edge::new(0, 2, 7.)], IndexBase::Zero);
        assert!(matches!(
            result,
            Err(Error::VertexOutOfRange {
                from: 0,
                to: 2,
                vertices: 2
            })
        ));
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn last_write_wins() {
        let g = Graph::from_edges(
            2,
            [Edge::new(1, 2, 5.), Edge::new(1, 2, 9.), Edge::new(1, 2, 3.)],
            IndexBase::One,
        )
        .unwrap();
        assert_eq!(g.weight(0, 1), 3.);
        assert_eq!(g.edge_count(), 1);
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn out_of_range() {
        let mut g = Graph::new(4);
        assert!(g.set_edge(Edge::new(4, 4, 1.), IndexBase::One).is_ok());

        let result = g.set_edge(Edge::new(5, 1, 1.), IndexBase::One);
        assert!(matches!(result, Err(Error::VertexOutOfRange { from: 5, .. })));

        let result = g.set_edge(Edge::new(1, 0, 1.), IndexBase::One);
        assert!(matches!(result, Err(Error::VertexOutOfRange { to: 0, .. })));

        // failed writes leave the matrix untouched
        assert_eq!(g.edge_count(), 1);
    }
}
