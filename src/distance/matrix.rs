//! Dense square table of travel costs.

/// A dense n×n table stored in row-major order, indexed `[from][to]`.
///
/// Used for both the distance and the duration half of a
/// [`CostMatrix`](super::CostMatrix).
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DenseMatrix;
///
/// let m = DenseMatrix::from_rows(&[
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ])
/// .expect("square");
/// assert_eq!(m.get(0, 1), 5.0);
/// assert_eq!(m.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DenseMatrix {
    /// Creates a table of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a table from row-major data.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a table from nested rows.
    ///
    /// Returns the index of the first row whose length differs from the
    /// number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, usize> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(i);
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, size })
    }

    /// Returns the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        self.data[from * self.size + to] = value;
    }

    /// Number of waypoints in this table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns the table as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.size.max(1)).map(<[f64]>::to_vec).collect()
    }

    /// Returns `true` if the table is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the candidate with the lowest cost from `from`.
    ///
    /// Candidates are scanned in the given order and only a strictly lower
    /// cost replaces the current pick, so with ascending candidates the
    /// smallest index wins ties. Returns `None` if `candidates` is empty.
    pub fn nearest<I>(&self, from: usize, candidates: I) -> Option<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut best: Option<(usize, f64)> = None;
        for c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DenseMatrix {
        DenseMatrix::from_rows(&[
            vec![0.0, 5.0, 8.0],
            vec![5.0, 0.0, 3.0],
            vec![8.0, 3.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_from_rows() {
        let m = sample();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 2), 8.0);
        assert_eq!(m.row(1), &[5.0, 0.0, 3.0]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![0.0, 1.0], vec![1.0]];
        assert_eq!(DenseMatrix::from_rows(&rows), Err(1));
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DenseMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut m = DenseMatrix::new(3);
        m.set(0, 1, 42.0);
        assert_eq!(m.get(0, 1), 42.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn test_symmetric() {
        assert!(sample().is_symmetric(1e-10));
        let mut m = DenseMatrix::new(2);
        m.set(0, 1, 10.0);
        m.set(1, 0, 15.0);
        assert!(!m.is_symmetric(1e-10));
    }

    #[test]
    fn test_to_rows_roundtrip() {
        let m = sample();
        assert_eq!(DenseMatrix::from_rows(&m.to_rows()).expect("square"), m);
    }

    #[test]
    fn test_nearest() {
        let m = sample();
        assert_eq!(m.nearest(0, [1, 2]), Some(1));
        assert_eq!(m.nearest(0, [2]), Some(2));
        assert_eq!(m.nearest(0, []), None);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let m = DenseMatrix::from_rows(&[
            vec![0.0, 2.0, 2.0],
            vec![2.0, 0.0, 2.0],
            vec![2.0, 2.0, 0.0],
        ])
        .expect("square");
        assert_eq!(m.nearest(0, [1, 2]), Some(1));
        assert_eq!(m.nearest(0, [2, 1]), Some(2));
    }
}
