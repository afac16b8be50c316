mod matrix;

mod model;

////////////////////////////////////////////////////////////////////////////////

pub use matrix::{DistanceMatrix, Matrix, WeightMatrix};

pub use model::{Edge, Graph, IndexBase};
