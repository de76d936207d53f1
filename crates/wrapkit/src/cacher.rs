//! Memoizing adapter: caches results by call signature

use std::collections::HashMap;
use std::num::NonZeroUsize;

use ahash::RandomState;
use parking_lot::Mutex;
use tracing::trace;

use crate::args::Args;
use crate::callable::Callable;
use crate::lru::LruCache;
use crate::stats::{CacheStats, Counters};
use crate::value::Value;

/// How many results a cacher keeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Keep every result for the lifetime of the wrapper
    #[default]
    Unbounded,
    /// Keep at most N results, evicting the least recently used
    Lru(NonZeroUsize),
}

/// Key → result mapping for one wrapper
enum Store {
    Unbounded(HashMap<String, Value, RandomState>),
    Lru(LruCache<String, Value>),
}

/// Result of storing a freshly computed value
struct Stored {
    value: Value,
    inserted: bool,
    evicted: Option<String>,
}

impl Store {
    fn new(policy: CachePolicy) -> Self {
        match policy {
            CachePolicy::Unbounded => Store::Unbounded(HashMap::with_hasher(RandomState::new())),
            CachePolicy::Lru(capacity) => Store::Lru(LruCache::new(capacity)),
        }
    }

    fn get(&mut self, key: &String) -> Option<Value> {
        match self {
            Store::Unbounded(map) => map.get(key).cloned(),
            Store::Lru(lru) => lru.get(key).cloned(),
        }
    }

    fn contains(&self, key: &String) -> bool {
        match self {
            Store::Unbounded(map) => map.contains_key(key),
            Store::Lru(lru) => lru.contains_key(key),
        }
    }

    /// Store `value` unless `key` was filled meanwhile; the earlier value wins
    fn insert(&mut self, key: String, value: Value) -> Stored {
        if let Some(existing) = self.get(&key) {
            return Stored {
                value: existing,
                inserted: false,
                evicted: None,
            };
        }

        let evicted = match self {
            Store::Unbounded(map) => {
                map.insert(key, value.clone());
                None
            }
            Store::Lru(lru) => lru.put(key, value.clone()),
        };

        Stored {
            value,
            inserted: true,
            evicted,
        }
    }

    fn len(&self) -> usize {
        match self {
            Store::Unbounded(map) => map.len(),
            Store::Lru(lru) => lru.len(),
        }
    }

    fn clear(&mut self) {
        match self {
            Store::Unbounded(map) => map.clear(),
            Store::Lru(lru) => lru.clear(),
        }
    }
}

/// Wrapper that invokes the inner function at most once per call signature
///
/// Failed calls are never cached, so the next call with the same arguments
/// tries again. The store is locked only around lookups and inserts, never
/// while the inner function runs.
pub struct Cacher<F> {
    inner: F,
    policy: CachePolicy,
    store: Mutex<Store>,
    counters: Counters,
}

impl<F: Callable> Cacher<F> {
    /// Wrap `inner` with an unbounded cache
    pub fn new(inner: F) -> Self {
        Self::with_policy(inner, CachePolicy::Unbounded)
    }

    /// Wrap `inner` with the given cache policy
    pub fn with_policy(inner: F, policy: CachePolicy) -> Self {
        Self {
            inner,
            policy,
            store: Mutex::new(Store::new(policy)),
            counters: Counters::default(),
        }
    }

    /// The wrapped function
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Cache policy in effect
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot()
    }

    /// Number of cached results
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a result for `args` is cached
    pub fn contains(&self, args: &Args) -> bool {
        self.store.lock().contains(&args.signature())
    }

    /// Drop every cached result and reset statistics
    pub fn clear(&self) {
        self.store.lock().clear();
        self.counters.reset();
    }
}

impl<F: Callable> Callable for Cacher<F> {
    type Error = F::Error;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn call(&self, args: &Args) -> Result<Value, F::Error> {
        let key = args.signature();

        let cached = self.store.lock().get(&key);
        if let Some(value) = cached {
            self.counters.record_hit();
            trace!("{}: cache hit for ({})", self.name(), key);
            return Ok(value);
        }

        self.counters.record_miss();
        trace!("{}: cache miss for ({})", self.name(), key);
        let value = self.inner.call(args)?;

        let stored = self.store.lock().insert(key, value);
        if stored.inserted {
            self.counters.record_insert();
        }
        if let Some(evicted) = stored.evicted {
            self.counters.record_eviction();
            trace!("{}: evicted ({})", self.name(), evicted);
        }

        Ok(stored.value)
    }
}

/// Shorthand for [`Cacher::new`]
pub fn cacher<F: Callable>(inner: F) -> Cacher<F> {
    Cacher::new(inner)
}
