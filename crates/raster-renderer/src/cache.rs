//! LRU cache of built color mappings.
//!
//! Entries are keyed by style descriptor *identity*: the address of the
//! `Arc<StyleDescriptor>` the caller holds. Two structurally identical
//! descriptors in separate `Arc`s are cached separately. Each entry keeps
//! its `Arc` alive so an address can't be reused by a different
//! descriptor while it is cached.
//!
//! Lookup, eviction and insertion happen under one lock, so a miss on a
//! full cache evicts exactly one entry even with concurrent renderers.

use lru::LruCache;
use planscape_common::StyleDescriptor;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, trace};

use crate::factory::{build_color_mapping, ColorMapping};

/// Default number of cached style mappings
pub const DEFAULT_CAPACITY: usize = 10_000;

type StyleKey = usize;

fn style_key(style: &Arc<StyleDescriptor>) -> StyleKey {
    Arc::as_ptr(style) as StyleKey
}

struct CachedMapping {
    /// Pins the descriptor so its address stays unique while cached
    _style: Arc<StyleDescriptor>,
    mapping: Arc<ColorMapping>,
}

/// Point-in-time cache statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub entries: usize,
}

impl CacheStats {
    /// Hit rate as a percentage (0-100).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Bounded cache of [`ColorMapping`]s per style descriptor.
pub struct ColorMapperCache {
    cache: Mutex<LruCache<StyleKey, CachedMapping>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl ColorMapperCache {
    /// Create a cache holding at most `capacity` mappings (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<StyleKey, CachedMapping>> {
        // Entries are immutable once inserted; a poisoned lock is still usable.
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the mapping for `style`, building and caching it on a miss.
    ///
    /// Hits mark the entry most recently used. A miss on a full cache
    /// evicts the least recently used entry before inserting.
    pub fn get_or_build(&self, style: &Arc<StyleDescriptor>) -> Arc<ColorMapping> {
        let key = style_key(style);
        let mut cache = self.lock();

        if let Some(cached) = cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key, "Color mapping cache hit");
            return Arc::clone(&cached.mapping);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let mapping = Arc::new(build_color_mapping(style));

        let entry = CachedMapping {
            _style: Arc::clone(style),
            mapping: Arc::clone(&mapping),
        };

        // `push` hands back whatever it displaced; the key is new, so that
        // can only be the LRU entry.
        if let Some((evicted_key, _)) = cache.push(key, entry) {
            self.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(
                evicted = evicted_key,
                entries = cache.len(),
                "Evicted least recently used color mapping"
            );
        }

        mapping
    }

    /// Whether `style` is cached. Does not touch recency.
    pub fn contains(&self, style: &Arc<StyleDescriptor>) -> bool {
        self.lock().contains(&style_key(style))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Drop every cached mapping.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}

impl Default for ColorMapperCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for ColorMapperCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorMapperCache")
            .field("stats", &self.stats())
            .finish()
    }
}
