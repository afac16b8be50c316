use std::fmt::Display;

////////////////////////////////////////////////////////////////////////////////

/// Dense square grid of extended reals, `f64::INFINITY` marks a missing path or edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    d: Vec<Vec<f64>>,
}

/// Raw edge weights as read from input.
pub type WeightMatrix = Matrix;

/// Shortest path lengths produced by an algorithm.
pub type DistanceMatrix = Matrix;

impl Matrix {
    pub fn new(n: usize) -> Self {
        Self {
            d: vec![vec![f64::INFINITY; n]; n],
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self { d: rows }
    }

    pub fn size(&self) -> usize {
        self.d.len()
    }

    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.d[from][to]
    }

    pub fn set(&mut self, from: usize, to: usize, w: f64) {
        self.d[from][to] = w;
    }

    // d[i][j] + d[j][k]
    pub fn sum_edge(&self, i: usize, j: usize, k: usize) -> f64 {
        self.d[i][j] + self.d[j][k]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.d[i]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.d.iter().map(Vec::as_slice)
    }
}

// one line per row, every value followed by a space
impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for w in row {
                write!(f, "{w} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Matrix;

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn basic() {
        let mut m = Matrix::new(3);
        assert_eq!(m.size(), 3);
        assert!(m.rows().flatten().all(|w| w.is_infinite()));

        m.set(0, 1, 5.);
        m.set(0, 1, 6.);
        assert_eq!(m.get(0, 1), 6.);
        assert_eq!(m.get(1, 0), f64::INFINITY);

        m.set(1, 2, -3.);
        assert_eq!(m.sum_edge(0, 1, 2), 3.);
        assert_eq!(m.sum_edge(1, 2, 0), f64::INFINITY);
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(vec![vec![0., 1.], vec![f64::INFINITY, 0.]]);
        assert_eq!(m.size(), 2);
        assert_eq!(m.row(0), [0., 1.]);
        assert_eq!(m.row(1), [f64::INFINITY, 0.]);

        assert!(Matrix::new(0).is_empty());
        assert!(Matrix::from_rows(Vec::new()).is_empty());
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn display() {
        let m = Matrix::from_rows(vec![vec![0., -2.5], vec![f64::INFINITY, 0.]]);
        assert_eq!(m.to_string(), "0 -2.5 \ninf 0 \n");
        assert_eq!(Matrix::new(0).to_string(), "");
    }
}
