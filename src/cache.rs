//! Bounded, thread-safe response cache.
//!
//! Holds routing-service responses keyed by operation, travel profile and
//! rounded coordinates. Capacity is fixed; once it is exceeded, `moka`
//! evicts entries by its frequency/recency policy. The cache is `Send + Sync`
//! and can be shared across request-handling threads.

use std::hash::Hash;

use moka::sync::Cache;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

/// Decimal places kept when rounding coordinates into a key (about 1 m).
pub const ROUNDING_DECIMALS: i32 = 5;

/// Routing-service operation a cached response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Pairwise cost matrix.
    Table,
    /// Route geometry through ordered waypoints.
    Route,
}

/// Travel mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Car.
    #[default]
    Driving,
    /// Walking.
    Foot,
    /// Cycling.
    Bike,
}

/// Cache key: operation, profile and coordinates rounded to
/// [`ROUNDING_DECIMALS`] places.
///
/// # Examples
///
/// ```
/// use u_tsp::cache::{CacheKey, Operation, Profile};
///
/// let a = CacheKey::new(Operation::Table, Profile::Driving, &[[13.404954, 52.520008]]);
/// let b = CacheKey::new(Operation::Table, Profile::Driving, &[[13.404951, 52.520011]]);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: Operation,
    profile: Profile,
    coords: Vec<[i64; 2]>,
}

impl CacheKey {
    /// Builds a key from `[lng, lat]` coordinates.
    pub fn new(operation: Operation, profile: Profile, coords: &[[f64; 2]]) -> Self {
        let scale = 10f64.powi(ROUNDING_DECIMALS);
        let coords = coords
            .iter()
            .map(|c| [(c[0] * scale).round() as i64, (c[1] * scale).round() as i64])
            .collect();
        Self {
            operation,
            profile,
            coords,
        }
    }
}

/// A fixed-capacity concurrent map.
///
/// Lookups return a clone of the stored value. Past capacity, the least
/// useful entries are evicted; eviction is applied lazily and settled by
/// [`len`](Self::len) and [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use u_tsp::cache::BoundedCache;
///
/// let cache = BoundedCache::new(2).expect("non-zero capacity");
/// cache.insert("a", 1);
/// cache.insert("a", 2);
/// assert_eq!(cache.get(&"a"), Some(2));
/// assert_eq!(cache.get(&"b"), None);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct BoundedCache<K, V> {
    capacity: usize,
    entries: Cache<K, V>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfig(
                "cache capacity must be positive".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            entries: Cache::builder().max_capacity(capacity as u64).build(),
        })
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Number of stored entries, after pending evictions are applied.
    pub fn len(&self) -> usize {
        self.entries.run_pending_tasks();
        let len = self.entries.entry_count() as usize;
        trace!("Cache holds {len} of {} entries", self.capacity);
        len
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.invalidate_all();
        self.entries.run_pending_tasks();
    }
}
