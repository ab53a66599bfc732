//! LRU-cached wrappers around any [`Geocoder`] or [`Router`].
//!
//! Only successes are cached; failures go back to the inner provider on the
//! next call. A capacity of 0 disables caching.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use fare_core::collaborators::{GeocodeError, Geocoder, RouteError, Router};
use fare_core::model::Location;
use log::debug;
use lru::LruCache;

fn new_cache<K: std::hash::Hash + Eq, V>(capacity: usize) -> Option<Mutex<LruCache<K, V>>> {
    NonZeroUsize::new(capacity).map(|capacity| Mutex::new(LruCache::new(capacity)))
}

fn cached_get<K: std::hash::Hash + Eq, V: Clone>(
    cache: &Option<Mutex<LruCache<K, V>>>,
    key: &K,
) -> Option<V> {
    let mut cache = cache.as_ref()?.lock().ok()?;
    cache.get(key).cloned()
}

fn cached_put<K: std::hash::Hash + Eq, V>(cache: &Option<Mutex<LruCache<K, V>>>, key: K, value: V) {
    if let Some(Ok(mut cache)) = cache.as_ref().map(|cache| cache.lock()) {
        cache.put(key, value);
    }
}

/// Cache key is the queried address.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: Option<Mutex<LruCache<String, Location>>>,
}

impl<G> CachedGeocoder<G> {
    pub fn new(inner: G, capacity: usize) -> Self {
        Self {
            inner,
            cache: new_cache(capacity),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

impl<G: Geocoder> Geocoder for CachedGeocoder<G> {
    async fn resolve(&self, address: &str) -> Result<Location, GeocodeError> {
        let key = address.to_string();
        if let Some(hit) = cached_get(&self.cache, &key) {
            debug!("geocoder cache hit for '{address}'");
            return Ok(hit);
        }

        let location = self.inner.resolve(address).await?;
        cached_put(&self.cache, key, location.clone());
        Ok(location)
    }
}

/// Cache key is `(from address, to address)` (directional).
pub struct CachedRouter<R> {
    inner: R,
    cache: Option<Mutex<LruCache<(String, String), f64>>>,
}

impl<R> CachedRouter<R> {
    pub fn new(inner: R, capacity: usize) -> Self {
        Self {
            inner,
            cache: new_cache(capacity),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: Router> Router for CachedRouter<R> {
    async fn distance_km(&self, from: &Location, to: &Location) -> Result<f64, RouteError> {
        let key = (from.address.clone(), to.address.clone());
        if let Some(hit) = cached_get(&self.cache, &key) {
            debug!("router cache hit for '{}' -> '{}'", from.address, to.address);
            return Ok(hit);
        }

        let km = self.inner.distance_km(from, to).await?;
        cached_put(&self.cache, key, km);
        Ok(km)
    }
}
