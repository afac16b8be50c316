pub mod algo;
mod config;
mod error;
mod graph;
pub mod input;
mod log;
pub mod output;
mod run;
mod timer;

////////////////////////////////////////////////////////////////////////////////

pub use algo::{BellmanFord, FloydWarshall, ShortestPaths, Solution};

pub use config::{Algorithm, Config, ConfigBuilder};

pub use error::{Error, Result};

pub use graph::{DistanceMatrix, Edge, Graph, IndexBase, Matrix, WeightMatrix};

pub use log::{Log, LogEntry};

pub use run::{run, AlgorithmRun, Report, Timings};
