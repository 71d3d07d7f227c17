// this_file: crates/sigfit-core/src/measure_cache.rs
//! Opt-in memoization for measurement backends
//!
//! The engine itself never caches - probes must reflect whatever the port
//! reports - but callers whose measurer is expensive can wrap it in
//! [`CachedMeasurer`] once and hand the engine the wrapped port. Repeated
//! probes of the same text/font/size then cost a map lookup, which also
//! pins down the repeatability the search already assumes.

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::Result;
use crate::profile::FontProfile;
use crate::traits::TextMeasurer;
use crate::types::BoundingBox;

/// Uniquely identifies one measurement probe
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct MeasureCacheKey {
    pub text: String,
    pub font_id: String,
    pub size_px: u32,
}

/// Default capacity, sized for a handful of searches worth of probes
const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(512) {
    Some(v) => v,
    None => unreachable!(),
};

/// LRU store for measurement results
pub struct MeasureCache {
    entries: Mutex<LruCache<MeasureCacheKey, BoundingBox>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MeasureCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY.get())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(DEFAULT_CAPACITY);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &MeasureCacheKey) -> Option<BoundingBox> {
        let hit = self.entries.lock().get(key).copied();
        match hit {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        hit
    }

    pub fn insert(&self, key: MeasureCacheKey, value: BoundingBox) {
        self.entries.lock().put(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Snapshot of hit/miss counters since construction
    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        CacheStats {
            hits,
            misses,
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

/// Decorator that memoizes another measurer
///
/// Keys on text content, font id, and pixel size - the same triple the
/// engine varies while searching. Tuning fields are deliberately not part of
/// the key: a font id names one immutable profile for the lifetime of the
/// registry it came from.
pub struct CachedMeasurer {
    inner: Arc<dyn TextMeasurer>,
    cache: MeasureCache,
}

impl CachedMeasurer {
    pub fn new(inner: Arc<dyn TextMeasurer>) -> Self {
        Self {
            inner,
            cache: MeasureCache::new(),
        }
    }

    pub fn with_capacity(inner: Arc<dyn TextMeasurer>, capacity: usize) -> Self {
        Self {
            inner,
            cache: MeasureCache::with_capacity(capacity),
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl TextMeasurer for CachedMeasurer {
    fn name(&self) -> &'static str {
        "cached"
    }

    fn measure(&self, text: &str, font: &FontProfile, size_px: u32) -> Result<BoundingBox> {
        let key = MeasureCacheKey {
            text: text.to_owned(),
            font_id: font.id.clone(),
            size_px,
        };

        if let Some(found) = self.cache.get(&key) {
            log::trace!(
                "measure cache hit: {:?} at {}px via {}",
                text,
                size_px,
                self.inner.name()
            );
            return Ok(found);
        }

        let measured = self.inner.measure(text, font, size_px)?;
        self.cache.insert(key, measured);
        Ok(measured)
    }

    fn clear_cache(&self) {
        self.cache.clear();
        self.inner.clear_cache();
    }
}
