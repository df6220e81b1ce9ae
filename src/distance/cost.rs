//! Paired distance/duration matrix with validation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DenseMatrix;
use crate::error::{Error, Result};

/// Smallest instance any solver accepts.
pub const MIN_WAYPOINTS: usize = 3;

/// Travel costs between every pair of waypoints.
///
/// Holds a distance table and a duration table of equal size. Every entry is
/// finite and non-negative and both diagonals are zero; the tables may be
/// asymmetric. Index 0 is the origin of every route.
///
/// Serializes to and from `{"durations": [[..]], "distances": [[..]]}`.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
///
/// let rows = vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ];
/// let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.duration(0, 2), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    distances: DenseMatrix,
    durations: DenseMatrix,
}

impl CostMatrix {
    /// Creates a cost matrix from two dense tables, validating every entry.
    pub fn new(distances: DenseMatrix, durations: DenseMatrix) -> Result<Self> {
        if distances.size() != durations.size() {
            return Err(Error::DimensionMismatch {
                distances: distances.size(),
                durations: durations.size(),
            });
        }
        validate_table("distances", &distances)?;
        validate_table("durations", &durations)?;
        Ok(Self {
            distances,
            durations,
        })
    }

    /// Creates a cost matrix from nested rows, as found in JSON payloads.
    pub fn from_rows(distances: Vec<Vec<f64>>, durations: Vec<Vec<f64>>) -> Result<Self> {
        let distances = dense("distances", &distances)?;
        let durations = dense("durations", &durations)?;
        Self::new(distances, durations)
    }

    /// Number of waypoints.
    pub fn size(&self) -> usize {
        self.distances.size()
    }

    /// Travel distance from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Travel duration from `from` to `to`.
    pub fn duration(&self, from: usize, to: usize) -> f64 {
        self.durations.get(from, to)
    }

    /// The distance table.
    pub fn distances(&self) -> &DenseMatrix {
        &self.distances
    }

    /// The duration table.
    pub fn durations(&self) -> &DenseMatrix {
        &self.durations
    }

    /// Fails with [`Error::TooFewWaypoints`] below [`MIN_WAYPOINTS`].
    pub fn ensure_solvable(&self) -> Result<()> {
        if self.size() < MIN_WAYPOINTS {
            return Err(Error::TooFewWaypoints {
                min: MIN_WAYPOINTS,
                got: self.size(),
            });
        }
        Ok(())
    }

    /// Returns a copy re-indexed so that `source` becomes waypoint 0.
    ///
    /// The remaining waypoints keep their relative order. The returned
    /// mapping translates a new index into the original one, for use with
    /// [`Solution::remap`](crate::models::Solution::remap).
    ///
    /// ```
    /// use u_tsp::distance::CostMatrix;
    ///
    /// let rows = vec![
    ///     vec![0.0, 1.0, 2.0],
    ///     vec![1.0, 0.0, 3.0],
    ///     vec![2.0, 3.0, 0.0],
    /// ];
    /// let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
    /// let (rooted, mapping) = m.rerooted(2).expect("in range");
    /// assert_eq!(mapping, vec![2, 0, 1]);
    /// assert_eq!(rooted.duration(0, 2), 3.0);
    /// ```
    pub fn rerooted(&self, source: usize) -> Result<(Self, Vec<usize>)> {
        let n = self.size();
        if source >= n {
            return Err(Error::SourceOutOfRange {
                source_index: source,
                size: n,
            });
        }
        let mapping: Vec<usize> = std::iter::once(source)
            .chain((0..n).filter(|&i| i != source))
            .collect();

        let mut distances = DenseMatrix::new(n);
        let mut durations = DenseMatrix::new(n);
        for (a, &from) in mapping.iter().enumerate() {
            for (b, &to) in mapping.iter().enumerate() {
                distances.set(a, b, self.distance(from, to));
                durations.set(a, b, self.duration(from, to));
            }
        }
        Ok((
            Self {
                distances,
                durations,
            },
            mapping,
        ))
    }
}

fn dense(table: &'static str, rows: &[Vec<f64>]) -> Result<DenseMatrix> {
    DenseMatrix::from_rows(rows).map_err(|row| Error::NotSquare {
        table,
        row,
        len: rows[row].len(),
        expected: rows.len(),
    })
}

fn validate_table(table: &'static str, m: &DenseMatrix) -> Result<()> {
    for from in 0..m.size() {
        for (to, &value) in m.row(from).iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::NonFiniteEntry { table, from, to });
            }
            if value < 0.0 {
                return Err(Error::NegativeEntry {
                    table,
                    from,
                    to,
                    value,
                });
            }
            if from == to && value != 0.0 {
                return Err(Error::NonZeroDiagonal {
                    table,
                    index: from,
                    value,
                });
            }
        }
    }
    Ok(())
}

#[derive(Serialize, Deserialize)]
struct RawMatrix {
    durations: Vec<Vec<f64>>,
    distances: Vec<Vec<f64>>,
}

impl Serialize for CostMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawMatrix {
            durations: self.durations.to_rows(),
            distances: self.distances.to_rows(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CostMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawMatrix::deserialize(deserializer)?;
        CostMatrix::from_rows(raw.distances, raw.durations).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 1.0, 2.0],
            vec![4.0, 0.0, 3.0],
            vec![5.0, 6.0, 0.0],
        ]
    }

    #[test]
    fn test_valid_asymmetric() {
        let m = CostMatrix::from_rows(rows(), rows()).expect("valid");
        assert_eq!(m.size(), 3);
        assert_eq!(m.distance(1, 0), 4.0);
        assert!(!m.durations().is_symmetric(1e-10));
        assert!(m.ensure_solvable().is_ok());
    }

    #[test]
    fn test_not_square() {
        let bad = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0], vec![2.0, 1.0, 0.0]];
        let err = CostMatrix::from_rows(bad, rows()).unwrap_err();
        assert!(matches!(
            err,
            Error::NotSquare {
                table: "distances",
                row: 1,
                len: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn test_dimension_mismatch() {
        let small = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let err = CostMatrix::from_rows(rows(), small).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                distances: 3,
                durations: 2
            }
        ));
    }

    #[test]
    fn test_negative_entry() {
        let mut bad = rows();
        bad[2][1] = -1.0;
        let err = CostMatrix::from_rows(rows(), bad).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeEntry {
                table: "durations",
                from: 2,
                to: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_entry() {
        let mut bad = rows();
        bad[0][1] = f64::NAN;
        let err = CostMatrix::from_rows(bad, rows()).unwrap_err();
        assert!(matches!(err, Error::NonFiniteEntry { from: 0, to: 1, .. }));
    }

    #[test]
    fn test_non_zero_diagonal() {
        let mut bad = rows();
        bad[1][1] = 0.5;
        let err = CostMatrix::from_rows(bad, rows()).unwrap_err();
        assert!(matches!(err, Error::NonZeroDiagonal { index: 1, .. }));
    }

    #[test]
    fn test_too_few_waypoints() {
        let two = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        let m = CostMatrix::from_rows(two.clone(), two).expect("valid");
        assert!(matches!(
            m.ensure_solvable(),
            Err(Error::TooFewWaypoints { min: 3, got: 2 })
        ));
    }

    #[test]
    fn test_rerooted() {
        let m = CostMatrix::from_rows(rows(), rows()).expect("valid");
        let (r, mapping) = m.rerooted(1).expect("in range");
        assert_eq!(mapping, vec![1, 0, 2]);
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(r.duration(a, b), m.duration(mapping[a], mapping[b]));
                assert_eq!(r.distance(a, b), m.distance(mapping[a], mapping[b]));
            }
        }
    }

    #[test]
    fn test_rerooted_identity() {
        let m = CostMatrix::from_rows(rows(), rows()).expect("valid");
        let (r, mapping) = m.rerooted(0).expect("in range");
        assert_eq!(mapping, vec![0, 1, 2]);
        assert_eq!(r, m);
    }

    #[test]
    fn test_rerooted_out_of_range() {
        let m = CostMatrix::from_rows(rows(), rows()).expect("valid");
        assert!(matches!(
            m.rerooted(3),
            Err(Error::SourceOutOfRange {
                source_index: 3,
                size: 3
            })
        ));
    }

    #[test]
    fn test_json() {
        let json = r#"{"durations": [[0, 2, 3], [2, 0, 1], [3, 1, 0]],
                       "distances": [[0, 20, 30], [20, 0, 10], [30, 10, 0]]}"#;
        let m: CostMatrix = serde_json::from_str(json).expect("valid json");
        assert_eq!(m.duration(0, 2), 3.0);
        assert_eq!(m.distance(2, 1), 10.0);

        let back = serde_json::to_string(&m).expect("serialize");
        let again: CostMatrix = serde_json::from_str(&back).expect("roundtrip");
        assert_eq!(again, m);
    }

    #[test]
    fn test_json_rejects_negative() {
        let json = r#"{"durations": [[0, -2], [2, 0]], "distances": [[0, 1], [1, 0]]}"#;
        assert!(serde_json::from_str::<CostMatrix>(json).is_err());
    }
}
