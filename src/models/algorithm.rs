//! Algorithm identifiers and the per-algorithm result set.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::Solution;
use crate::error::Error;

/// The closed set of solving strategies.
///
/// Declaration order is the priority order used to break exact ties between
/// solutions. The identifiers used by earlier clients (`brute_force`,
/// `nearest_neighbor`, `two_opt`, `genetic`) are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Enumerates every ordering (small instances only).
    #[serde(alias = "brute_force")]
    Exhaustive,
    /// Nearest-neighbor construction.
    #[serde(alias = "nearest_neighbor")]
    Greedy,
    /// 2-opt improvement of the greedy route.
    #[serde(alias = "two_opt")]
    LocalSearch,
    /// Genetic algorithm with sequential constructive crossover.
    #[serde(alias = "genetic")]
    Population,
}

impl Algorithm {
    /// All algorithms in priority order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Exhaustive,
        Algorithm::Greedy,
        Algorithm::LocalSearch,
        Algorithm::Population,
    ];

    /// Wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::Greedy => "greedy",
            Algorithm::LocalSearch => "local-search",
            Algorithm::Population => "population",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exhaustive" | "brute_force" => Ok(Algorithm::Exhaustive),
            "greedy" | "nearest_neighbor" => Ok(Algorithm::Greedy),
            "local-search" | "two_opt" => Ok(Algorithm::LocalSearch),
            "population" | "genetic" => Ok(Algorithm::Population),
            other => Err(Error::InvalidConfig(format!("unknown algorithm `{other}`"))),
        }
    }
}

/// Result of each algorithm for one request.
///
/// An entry is `None` when the algorithm was not requested or could not be
/// computed for the instance. Serializes as a map with every algorithm as a
/// key and `null` for absent entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SolutionSet {
    slots: [Option<Solution>; 4],
}

impl SolutionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of `algorithm`.
    pub fn insert(&mut self, algorithm: Algorithm, solution: Option<Solution>) {
        self.slots[algorithm.slot()] = solution;
    }

    /// Returns the solution of `algorithm`, if computed.
    pub fn get(&self, algorithm: Algorithm) -> Option<&Solution> {
        self.slots[algorithm.slot()].as_ref()
    }

    /// Iterates computed solutions in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Algorithm, &Solution)> {
        Algorithm::ALL
            .into_iter()
            .filter_map(|a| self.get(a).map(|s| (a, s)))
    }

    /// Number of computed solutions.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns `true` if no algorithm produced a solution.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The computed solution with the lowest total duration.
    ///
    /// Exact ties go to the algorithm earliest in priority order.
    pub fn best(&self) -> Option<(Algorithm, &Solution)> {
        let mut best: Option<(Algorithm, &Solution)> = None;
        for (a, s) in self.iter() {
            match best {
                Some((_, b)) if s.total_duration >= b.total_duration => {}
                _ => best = Some((a, s)),
            }
        }
        best
    }

    /// Applies `f` to every computed solution.
    pub fn map_solutions<F>(self, mut f: F) -> Self
    where
        F: FnMut(Solution) -> Solution,
    {
        Self {
            slots: self.slots.map(|s| s.map(&mut f)),
        }
    }
}

impl Serialize for SolutionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Algorithm::ALL.len()))?;
        for a in Algorithm::ALL {
            map.serialize_entry(a.as_str(), &self.get(a))?;
        }
        map.end()
    }
}
