//! Solution and leg types.

use serde::{Deserialize, Serialize};

/// One traversed edge between two consecutive waypoints of a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Waypoint the leg departs from.
    pub from: usize,
    /// Waypoint the leg arrives at.
    pub to: usize,
    /// Travel distance of this leg.
    pub distance: f64,
    /// Travel duration of this leg.
    pub duration: f64,
}

/// An evaluated visiting order.
///
/// `order` starts at the origin and visits every waypoint once. Totals are
/// the sums of the leg values, accumulated in leg order; there is no return
/// leg to the origin.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::evaluation::evaluate;
///
/// let rows = vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ];
/// let m = CostMatrix::from_rows(rows.clone(), rows).expect("valid");
/// let sol = evaluate(&[0, 1, 2], &m).expect("two or more waypoints");
/// assert_eq!(sol.legs.len(), 2);
/// assert_eq!(sol.total_duration, 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Waypoint indices in visiting order.
    pub order: Vec<usize>,
    /// Sum of leg distances.
    pub total_distance: f64,
    /// Sum of leg durations.
    pub total_duration: f64,
    /// Consecutive legs, `legs[i]` joins `order[i]` and `order[i + 1]`.
    pub legs: Vec<Leg>,
}

impl Solution {
    /// Number of waypoints visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the order is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Translates every waypoint index through `mapping`.
    ///
    /// `mapping[i]` is the caller-facing index of internal waypoint `i`, as
    /// returned by [`CostMatrix::rerooted`](crate::distance::CostMatrix::rerooted).
    /// Totals are unchanged.
    pub fn remap(mut self, mapping: &[usize]) -> Self {
        for w in &mut self.order {
            *w = mapping[*w];
        }
        for leg in &mut self.legs {
            leg.from = mapping[leg.from];
            leg.to = mapping[leg.to];
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Solution {
        Solution {
            order: vec![0, 2, 1],
            total_distance: 30.0,
            total_duration: 3.0,
            legs: vec![
                Leg {
                    from: 0,
                    to: 2,
                    distance: 10.0,
                    duration: 1.0,
                },
                Leg {
                    from: 2,
                    to: 1,
                    distance: 20.0,
                    duration: 2.0,
                },
            ],
        }
    }

    #[test]
    fn test_len() {
        let sol = sample();
        assert_eq!(sol.len(), 3);
        assert!(!sol.is_empty());
    }

    #[test]
    fn test_remap() {
        let sol = sample().remap(&[2, 0, 1]);
        assert_eq!(sol.order, vec![2, 1, 0]);
        assert_eq!((sol.legs[0].from, sol.legs[0].to), (2, 1));
        assert_eq!((sol.legs[1].from, sol.legs[1].to), (1, 0));
        assert_eq!(sol.total_duration, 3.0);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["totalDuration"], 3.0);
        assert_eq!(json["totalDistance"], 30.0);
        assert_eq!(json["legs"][0]["from"], 0);
        assert_eq!(json["legs"][1]["to"], 1);
    }
}
