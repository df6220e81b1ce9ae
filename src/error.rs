//! Error types for matrix validation, route checks, and configuration.

/// Possible errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A table row does not have as many entries as there are rows.
    #[error("{table} row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// Which table (`distances` or `durations`).
        table: &'static str,
        /// Offending row.
        row: usize,
        /// Entries found in the row.
        len: usize,
        /// Expected entries (number of rows).
        expected: usize,
    },

    /// Distance and duration tables disagree on the number of waypoints.
    #[error("distances cover {distances} waypoints but durations cover {durations}")]
    DimensionMismatch {
        /// Size of the distance table.
        distances: usize,
        /// Size of the duration table.
        durations: usize,
    },

    /// A travel cost is negative.
    #[error("{table}[{from}][{to}] = {value} is negative")]
    NegativeEntry {
        /// Which table.
        table: &'static str,
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// Offending value.
        value: f64,
    },

    /// A travel cost is NaN or infinite.
    #[error("{table}[{from}][{to}] is not finite")]
    NonFiniteEntry {
        /// Which table.
        table: &'static str,
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },

    /// A diagonal entry is not zero.
    #[error("{table}[{index}][{index}] = {value}, diagonal must be zero")]
    NonZeroDiagonal {
        /// Which table.
        table: &'static str,
        /// Diagonal index.
        index: usize,
        /// Offending value.
        value: f64,
    },

    /// Fewer waypoints than any solver accepts.
    #[error("need at least {min} waypoints, got {got}")]
    TooFewWaypoints {
        /// Minimum accepted.
        min: usize,
        /// Waypoints supplied.
        got: usize,
    },

    /// The requested origin is not a waypoint of the matrix.
    #[error("source index {source_index} out of range for {size} waypoints")]
    SourceOutOfRange {
        /// Requested origin.
        source_index: usize,
        /// Number of waypoints.
        size: usize,
    },

    /// A route does not visit as many waypoints as the matrix holds.
    #[error("route has {len} entries but the matrix has {size} waypoints")]
    RouteLength {
        /// Route length.
        len: usize,
        /// Matrix size.
        size: usize,
    },

    /// A route is not a permutation starting at the origin.
    #[error("route is not a permutation of 0..{size} starting at 0")]
    InvalidRoute {
        /// Matrix size.
        size: usize,
    },

    /// A solver parameter is outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
