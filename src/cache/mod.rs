//! Canonicalizing caches for coordinate values
//!
//! A cache maps a component triple to one shared, immutable instance, so
//! every caller asking for the same triple holds the same `Arc`.
//!
//! ## Exact Keys
//!
//! Keys compare the raw bit patterns of the three components
//! ([`ComponentKey`]), not the `1e-6` tolerance the coordinate types use for
//! value equality. Two triples that differ only by rounding, or `0.0` and
//! `-0.0`, intern as separate entries even though the resulting
//! coordinates compare equal. This is a known limitation of exact keys.
//!
//! ## Concurrency
//!
//! Entries live in a [`DashMap`]. Insert-if-absent goes through
//! [`DashMap::entry`], which holds the shard lock across the lookup and the
//! insert, so two threads racing on one key always end up with the same
//! instance.
//!
//! ## Growth
//!
//! Caches are unbounded by default and never evict. With
//! [`CacheConfig::with_max_entries`] a full cache keeps serving its existing
//! entries and hands out fresh, unregistered instances for new keys. The
//! bound is checked before locking a shard, so concurrent inserts can
//! overshoot it by a few entries.

use crate::coordinates::cartesian::CartesianCoordinate;
use crate::coordinates::spheric::SphericCoordinate;
use crate::Result;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, trace};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Coordinate types a [`CoordinateCache`] can build from a component triple
pub trait FromComponents: Sized + Send + Sync {
    /// Human readable name used in log output
    const NAME: &'static str;

    /// Validating constructor from the three components
    fn from_components(a: f64, b: f64, c: f64) -> Result<Self>;
}

impl FromComponents for CartesianCoordinate {
    const NAME: &'static str = "cartesian";

    fn from_components(x: f64, y: f64, z: f64) -> Result<Self> {
        CartesianCoordinate::new(x, y, z)
    }
}

impl FromComponents for SphericCoordinate {
    const NAME: &'static str = "spheric";

    fn from_components(latitude: f64, longitude: f64, radius: f64) -> Result<Self> {
        SphericCoordinate::new(latitude, longitude, radius)
    }
}

/// Exact bit-level key for a component triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentKey([u64; 3]);

impl ComponentKey {
    /// Builds the key from the bit patterns of `a`, `b` and `c`
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        ComponentKey([a.to_bits(), b.to_bits(), c.to_bits()])
    }

    /// Recovers the original components
    pub fn components(&self) -> [f64; 3] {
        self.0.map(f64::from_bits)
    }
}

/// Cache sizing options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheConfig {
    /// Capacity reserved up front
    pub initial_capacity: usize,
    /// Upper bound on registered entries, `None` for unbounded
    pub max_entries: Option<usize>,
}

impl CacheConfig {
    /// Unbounded cache with no reserved capacity
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve room for `capacity` entries
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Stop registering new keys once `max_entries` are present
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of registered entries
    pub entries: usize,
    /// Lookups answered by an existing entry
    pub hits: u64,
    /// Lookups that had to construct a coordinate
    pub misses: u64,
    /// Configured bound, if any
    pub max_entries: Option<usize>,
}

/// Thread-safe canonicalizing cache for one coordinate representation
///
/// Cloning is cheap and shares the backing map.
pub struct CoordinateCache<C> {
    entries: Arc<DashMap<ComponentKey, Arc<C>>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    config: CacheConfig,
    _marker: PhantomData<fn() -> C>,
}

/// Cache of canonical [`CartesianCoordinate`] instances keyed by `(x, y, z)`
pub type CartesianCache = CoordinateCache<CartesianCoordinate>;

/// Cache of canonical [`SphericCoordinate`] instances keyed by `(latitude, longitude, radius)`
pub type SphericCache = CoordinateCache<SphericCoordinate>;

impl<C: FromComponents> CoordinateCache<C> {
    /// Creates an empty, unbounded cache
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates an empty cache with the given sizing options
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            entries: Arc::new(DashMap::with_capacity(config.initial_capacity)),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
            config,
            _marker: PhantomData,
        }
    }

    /// Returns the canonical instance for the triple, creating it if needed
    ///
    /// # Errors
    ///
    /// Whatever the coordinate constructor reports for an invalid triple.
    /// Invalid triples are never registered.
    pub fn get(&self, a: f64, b: f64, c: f64) -> Result<Arc<C>> {
        let key = ComponentKey::new(a, b, c);

        if let Some(entry) = self.entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(entry.value()));
        }

        if self.is_full() {
            let coordinate = Arc::new(C::from_components(a, b, c)?);
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(
                "{} cache full ({} entries), not interning {:?}",
                C::NAME,
                self.entries.len(),
                key.components()
            );
            return Ok(coordinate);
        }

        match self.entries.entry(key) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                let coordinate = Arc::new(C::from_components(a, b, c)?);
                entry.insert(Arc::clone(&coordinate));
                self.misses.fetch_add(1, Ordering::Relaxed);
                trace!("interned {} coordinate {:?}", C::NAME, [a, b, c]);
                Ok(coordinate)
            }
        }
    }

    fn is_full(&self) -> bool {
        self.config
            .max_entries
            .is_some_and(|max| self.entries.len() >= max)
    }

    /// Returns true if the exact triple is registered
    pub fn contains(&self, a: f64, b: f64, c: f64) -> bool {
        self.entries.contains_key(&ComponentKey::new(a, b, c))
    }

    /// Returns the number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry
    ///
    /// Instances already handed out stay valid, but later lookups create new
    /// canonical instances that are not pointer-equal to the old ones.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Returns cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            max_entries: self.config.max_entries,
        }
    }
}

impl<C> Clone for CoordinateCache<C> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            hits: Arc::clone(&self.hits),
            misses: Arc::clone(&self.misses),
            config: self.config,
            _marker: PhantomData,
        }
    }
}

impl<C: FromComponents> Default for CoordinateCache<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns one cache per representation
///
/// This is the cache-mediated construction entry point. Create one and pass
/// it to whatever needs canonical coordinates; tests build their own.
#[derive(Clone, Default)]
pub struct CoordinateRegistry {
    cartesian: CartesianCache,
    spheric: SphericCache,
}

impl CoordinateRegistry {
    /// Create a registry with two unbounded caches
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry whose caches both use `config`
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            cartesian: CartesianCache::with_config(config),
            spheric: SphericCache::with_config(config),
        }
    }

    /// Canonical Cartesian instance for `(x, y, z)`
    pub fn get_cartesian(&self, x: f64, y: f64, z: f64) -> Result<Arc<CartesianCoordinate>> {
        self.cartesian.get(x, y, z)
    }

    /// Canonical spheric instance for `(latitude, longitude, radius)`
    pub fn get_spheric(
        &self,
        latitude: f64,
        longitude: f64,
        radius: f64,
    ) -> Result<Arc<SphericCoordinate>> {
        self.spheric.get(latitude, longitude, radius)
    }

    /// The Cartesian cache
    pub fn cartesian_cache(&self) -> &CartesianCache {
        &self.cartesian
    }

    /// The spheric cache
    pub fn spheric_cache(&self) -> &SphericCache {
        &self.spheric
    }
}
