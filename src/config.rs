use std::{fmt::Display, path::PathBuf, str::FromStr};

use serde::Serialize;

////////////////////////////////////////////////////////////////////////////////

/// Which algorithms to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Algorithm {
    /// Both algorithms, Bellman-Ford result is written.
    #[default]
    All,
    BellmanFord,
    FloydWarshall,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(Algorithm::All),
            "b" | "B" => Ok(Algorithm::BellmanFord),
            "f" | "F" => Ok(Algorithm::FloydWarshall),
            _ => Err(format!(
                "unknown algorithm {s:?}, expected (a)ll, (b)ellman-ford or (f)loyd-warshall"
            )),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::All => write!(f, "all"),
            Algorithm::BellmanFord => write!(f, "bellman-ford"),
            Algorithm::FloydWarshall => write!(f, "floyd-warshall"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug)]
pub struct Config {
    pub input: PathBuf,
    /// Where the distance matrix goes, `<input>_shortestPaths.txt` if not set.
    pub output: Option<PathBuf>,
    pub algorithm: Algorithm,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        ConfigBuilder::new(input).build()
    }
}

////////////////////////////////////////////////////////////////////////////////

pub struct ConfigBuilder {
    input: PathBuf,
    output: Option<PathBuf>,
    algorithm: Algorithm,
}

impl ConfigBuilder {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            algorithm: Algorithm::default(),
        }
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn build(self) -> Config {
        Config {
            input: self.input,
            output: self.output,
            algorithm: self.algorithm,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Algorithm, Config, ConfigBuilder};

    ////////////////////////////////////////////////////////////////////////////////

    #[rstest]
    #[case("a", Algorithm::All)]
    #[case("b", Algorithm::BellmanFord)]
    #[case("B", Algorithm::BellmanFord)]
    #[case("f", Algorithm::FloydWarshall)]
    #[case("F", Algorithm::FloydWarshall)]
    fn parse_algorithm(#[case] letter: &str, #[case] expected: Algorithm) {
        assert_eq!(letter.parse::<Algorithm>(), Ok(expected));
    }

    #[rstest]
    fn unknown_algorithm(#[values("A", "x", "", "bf")] letter: &str) {
        assert!(letter.parse::<Algorithm>().is_err());
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn builder() {
        let cfg = Config::new("graph.txt");
        assert_eq!(cfg.algorithm, Algorithm::All);
        assert!(cfg.output.is_none());

        let cfg = ConfigBuilder::new("graph.txt")
            .algorithm(Algorithm::FloydWarshall)
            .output("out.txt")
            .build();
        assert_eq!(cfg.algorithm, Algorithm::FloydWarshall);
        assert_eq!(cfg.output.unwrap().to_str(), Some("out.txt"));
    }
}
