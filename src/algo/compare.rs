use crate::graph::DistanceMatrix;

////////////////////////////////////////////////////////////////////////////////

/// Exact entrywise equality, infinities are equal to each other.
///
/// Empty matrices and matrices of different sizes are never equal.
pub fn equal(a: &DistanceMatrix, b: &DistanceMatrix) -> bool {
    if a.is_empty() || b.is_empty() || a.size() != b.size() {
        return false;
    }
    a.rows().zip(b.rows()).all(|(x, y)| x == y)
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::graph::DistanceMatrix;

    use super::equal;

    const INF: f64 = f64::INFINITY;

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn same() {
        let a = DistanceMatrix::from_rows(vec![vec![0., 1.], vec![INF, 0.]]);
        assert!(equal(&a, &a.clone()));
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn different_entry() {
        let a = DistanceMatrix::from_rows(vec![vec![0., 1.], vec![INF, 0.]]);
        let b = DistanceMatrix::from_rows(vec![vec![0., 1.], vec![3., 0.]]);
        assert!(!equal(&a, &b));
        assert!(!equal(&b, &a));
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn dimension_mismatch() {
        let a = DistanceMatrix::new(2);
        let b = DistanceMatrix::new(3);
        assert!(!equal(&a, &b));

        let ragged = DistanceMatrix::from_rows(vec![vec![INF, INF], vec![INF]]);
        assert!(!equal(&a, &ragged));
    }

    ////////////////////////////////////////////////////////////////////////////////

    #[test]
    fn empty() {
        let empty = DistanceMatrix::new(0);
        assert!(!equal(&empty, &empty));
        assert!(!equal(&empty, &DistanceMatrix::new(1)));
    }
}
