use std::{
    fmt::Display,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Serialize;

use crate::{
    algo::{compare, BellmanFord, FloydWarshall, ShortestPaths, Solution},
    config::{Algorithm, Config},
    error::{Error, Result},
    graph::{DistanceMatrix, Graph},
    input,
    log::{Log, LogEntry},
    output,
    timer::Stopwatch,
};

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: &'static str,
    pub elapsed: Duration,
    pub negative_cycle: bool,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct Timings {
    pub read: Duration,
    pub compare: Option<Duration>,
    pub write: Duration,
}

/// Summary of a finished run.
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub algorithm: Algorithm,
    pub vertices: usize,
    pub edges: usize,
    pub declared_edges: usize,
    pub runs: Vec<AlgorithmRun>,
    /// Whether both algorithms agree, if both were run.
    pub agree: Option<bool>,
    pub negative_cycle: bool,
    pub timings: Timings,
    pub log: Log,
    /// The matrix written to [`Report::output`].
    #[serde(skip)]
    pub distances: DistanceMatrix,
}

impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(Error::io(path))
    }

    /// Per-phase timings, one phase per line.
    pub fn profile(&self) -> impl Display + '_ {
        Profile(self)
    }
}

struct Profile<'a>(&'a Report);

impl Display for Profile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let t = &self.0.timings;
        phase(f, "read", t.read)?;
        for run in self.0.runs.iter() {
            phase(f, run.algorithm, run.elapsed)?;
        }
        if let Some(compare) = t.compare {
            phase(f, "compare", compare)?;
        }
        phase(f, "write", t.write)
    }
}

fn phase(f: &mut std::fmt::Formatter<'_>, name: &str, elapsed: Duration) -> std::fmt::Result {
    writeln!(f, "{name:<16} {:>12.6}s", elapsed.as_secs_f64())
}

////////////////////////////////////////////////////////////////////////////////

/// Reads the graph, runs the selected algorithms and writes the distance matrix.
///
/// When both algorithms run, their results are compared and the Bellman-Ford
/// matrix is written regardless of the outcome.
/// Nothing is written if the input can not be read.
pub fn run(config: &Config) -> Result<Report> {
    let mut log = Log::new();
    let mut timings = Timings::default();
    let mut watch = Stopwatch::start();

    let input = input::read(&config.input)?;
    timings.read = watch.lap();
    let graph = &input.graph;
    log.add_entry(LogEntry::GraphLoaded {
        path: config.input.clone(),
        vertices: graph.vertices(),
        edges: graph.edge_count(),
    });
    if input.edge_lines != input.header.edges {
        log.add_entry(LogEntry::EdgeCountMismatch {
            declared: input.header.edges,
            read: input.edge_lines,
        });
    }

    let mut runs = Vec::new();
    let mut run_one = |algorithm: &dyn ShortestPaths| {
        solve(algorithm, graph, &mut watch, &mut log, &mut runs)
    };
    let (canonical, other) = match config.algorithm {
        Algorithm::All => (run_one(&BellmanFord), Some(run_one(&FloydWarshall))),
        Algorithm::BellmanFord => (run_one(&BellmanFord), None),
        Algorithm::FloydWarshall => (run_one(&FloydWarshall), None),
    };

    let agree = other.map(|other| {
        let same = compare::equal(&canonical.distances, &other.distances);
        timings.compare = Some(watch.lap());
        log.add_entry(if same {
            LogEntry::ResultsAgree
        } else {
            LogEntry::ResultsDiffer
        });
        same
    });

    let output = config
        .output
        .clone()
        .unwrap_or_else(|| output::output_path(&config.input));
    output::write(&output, &canonical.distances)?;
    timings.write = watch.lap();
    log.add_entry(LogEntry::OutputWritten {
        path: output.clone(),
    });

    Ok(Report {
        input: config.input.clone(),
        output,
        algorithm: config.algorithm,
        vertices: graph.vertices(),
        edges: graph.edge_count(),
        declared_edges: input.header.edges,
        negative_cycle: runs.iter().any(|r| r.negative_cycle),
        runs,
        agree,
        timings,
        log,
        distances: canonical.distances,
    })
}

fn solve(
    algorithm: &dyn ShortestPaths,
    graph: &Graph,
    watch: &mut Stopwatch,
    log: &mut Log,
    runs: &mut Vec<AlgorithmRun>,
) -> Solution {
    watch.lap();
    let solution = algorithm.all_pairs(graph);
    let elapsed = watch.lap();
    log.add_entry(LogEntry::AlgorithmFinished {
        algorithm: algorithm.name().to_string(),
        elapsed,
    });
    if solution.negative_cycle {
        log.add_entry(LogEntry::NegativeCycle {
            algorithm: algorithm.name().to_string(),
        });
    }
    runs.push(AlgorithmRun {
        algorithm: algorithm.name(),
        elapsed,
        negative_cycle: solution.negative_cycle,
    });
    solution
}
