//! Exact solvers.
//!
//! - [`exhaustive_search`] — Enumerates every ordering with a fixed origin, O(n!)

mod exhaustive;

pub use exhaustive::{exhaustive_search, MAX_EXHAUSTIVE_SIZE};
