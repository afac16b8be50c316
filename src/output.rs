use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    graph::DistanceMatrix,
};

////////////////////////////////////////////////////////////////////////////////

/// `dir/graph.txt` -> `dir/graph_shortestPaths.txt`
pub fn output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_shortestPaths.txt"))
}

/// One line per row, every value is followed by a space.
pub fn render(d: &DistanceMatrix) -> String {
    d.to_string()
}

pub fn write(path: impl AsRef<Path>, d: &DistanceMatrix) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render(d)).map_err(Error::io(path))
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::graph::DistanceMatrix;

    use super::{output_path, render};

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn path() {
        assert_eq!(
            output_path("data/graph.txt"),
            Path::new("data/graph_shortestPaths.txt")
        );
        assert_eq!(output_path("graph"), Path::new("graph_shortestPaths.txt"));
        assert_eq!(
            output_path("/tmp/a.b.txt"),
            Path::new("/tmp/a.b_shortestPaths.txt")
        );
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn format() {
        let d = DistanceMatrix::from_rows(vec![
            vec![0., 1., -2.],
            vec![f64::INFINITY, 0., 1.5],
            vec![f64::INFINITY, f64::INFINITY, 0.],
        ]);
        assert_eq!(render(&d), "0 1 -2 \ninf 0 1.5 \ninf inf 0 \n");
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn empty() {
        assert_eq!(render(&DistanceMatrix::new(0)), "");
    }
}
