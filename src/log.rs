use std::{fmt::Display, path::PathBuf, time::Duration};

use colored::Colorize;
use serde::Serialize;

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize)]
pub enum LogEntry {
    GraphLoaded {
        path: PathBuf,
        vertices: usize,
        edges: usize,
    },
    EdgeCountMismatch {
        declared: usize,
        read: usize,
    },
    AlgorithmFinished {
        algorithm: String,
        elapsed: Duration,
    },
    NegativeCycle {
        algorithm: String,
    },
    ResultsAgree,
    ResultsDiffer,
    OutputWritten {
        path: PathBuf,
    },
}

impl LogEntry {
    /// Entries which are shown even without verbose output.
    pub fn is_notable(&self) -> bool {
        matches!(
            self,
            LogEntry::NegativeCycle { .. } | LogEntry::ResultsAgree | LogEntry::ResultsDiffer
        )
    }
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogEntry::GraphLoaded {
                path,
                vertices,
                edges,
            } => write!(
                f,
                "loaded {:?}: {vertices} vertices, {edges} edges",
                path.display().to_string()
            ),
            LogEntry::EdgeCountMismatch { declared, read } => write!(
                f,
                "{}",
                format!("header declares {declared} edges, but {read} edge lines were read")
                    .yellow()
            ),
            LogEntry::AlgorithmFinished { algorithm, elapsed } => {
                write!(f, "{algorithm:<16} {:>12.6}s", elapsed.as_secs_f64())
            }
            LogEntry::NegativeCycle { algorithm } => write!(
                f,
                "{}",
                format!("{algorithm}: graph has negative weights").red()
            ),
            LogEntry::ResultsAgree => write!(
                f,
                "{}",
                "Floyd-Warshall and Bellman-Ford produced the same result".green()
            ),
            LogEntry::ResultsDiffer => write!(
                f,
                "{}",
                "Floyd-Warshall and Bellman-Ford produced different results".red()
            ),
            LogEntry::OutputWritten { path } => {
                write!(f, "written {:?}", path.display().to_string())
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, Serialize)]
pub struct Log {
    data: Vec<LogEntry>,
}

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_entry(&mut self, log_entry: LogEntry) {
        self.data.push(log_entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.data.iter()
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in self.data.iter() {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
