use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

use crate::models::Pharmacy;
use crate::services::cache::{CacheError, CacheManager};
use crate::services::postgres::{PharmacyRepository, PostgresError};

/// Errors returned by a pharmacy candidate source
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Pharmacy repository error: {0}")]
    Repository(#[from] PostgresError),

    #[error("Candidate source unavailable: {0}")]
    Unavailable(String),
}

/// Source of pharmacy candidates
///
/// Implementations return every pharmacy they know about. Radius filtering,
/// ordering and limiting are the caller's job.
pub trait PharmacySearch: Send + Sync {
    fn search_pharmacy_list(&self) -> impl Future<Output = Result<Vec<Pharmacy>, SearchError>> + Send;

    /// Whether the backing store is reachable
    fn is_healthy(&self) -> impl Future<Output = bool> + Send {
        async { true }
    }
}

/// Durable pharmacy storage
pub trait PharmacyStore: Send + Sync {
    fn find_all(&self) -> impl Future<Output = Result<Vec<Pharmacy>, PostgresError>> + Send;

    fn save_all(&self, pharmacies: &[Pharmacy]) -> impl Future<Output = Result<u64, PostgresError>> + Send;

    fn health_check(&self) -> impl Future<Output = Result<bool, PostgresError>> + Send;
}

/// Cache holding the full pharmacy list
pub trait PharmacyListCache: Send + Sync {
    /// `Ok(None)` on a miss
    fn get_pharmacies(&self) -> impl Future<Output = Result<Option<Arc<Vec<Pharmacy>>>, CacheError>> + Send;

    fn set_pharmacies(&self, pharmacies: &[Pharmacy]) -> impl Future<Output = Result<(), CacheError>> + Send;

    fn invalidate(&self) -> impl Future<Output = Result<(), CacheError>> + Send;
}

/// Fixed, in-memory candidate list
#[derive(Debug, Clone, Default)]
pub struct InMemoryPharmacySearch {
    pharmacies: Vec<Pharmacy>,
}

impl InMemoryPharmacySearch {
    pub fn new(pharmacies: Vec<Pharmacy>) -> Self {
        Self { pharmacies }
    }
}

impl PharmacySearch for InMemoryPharmacySearch {
    async fn search_pharmacy_list(&self) -> Result<Vec<Pharmacy>, SearchError> {
        Ok(self.pharmacies.clone())
    }
}

/// Cache-first pharmacy search backed by a durable store
///
/// Cache errors never fail a search: a miss, an empty cached list or a cache
/// failure all fall through to the store, after which the cache is refilled
/// best-effort.
pub struct PharmacySearchService<R = PharmacyRepository, C = CacheManager> {
    store: Arc<R>,
    cache: Option<Arc<C>>,
}

impl<R: PharmacyStore, C: PharmacyListCache> PharmacySearchService<R, C> {
    pub fn new(store: Arc<R>, cache: Option<Arc<C>>) -> Self {
        Self { store, cache }
    }

    /// Bulk-load pharmacies and drop the cached list so the next search
    /// sees them
    pub async fn reload(&self, pharmacies: &[Pharmacy]) -> Result<u64, SearchError> {
        let saved = self.store.save_all(pharmacies).await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.invalidate().await {
                tracing::warn!("Failed to invalidate pharmacy cache after reload: {}", e);
            }
        }

        Ok(saved)
    }

    async fn search_cache(&self, cache: &C) -> Option<Vec<Pharmacy>> {
        match cache.get_pharmacies().await {
            Ok(Some(pharmacies)) if !pharmacies.is_empty() => {
                tracing::debug!("Serving {} pharmacies from cache", pharmacies.len());
                Some(pharmacies.as_ref().clone())
            }
            Ok(Some(_)) => {
                tracing::debug!("Cached pharmacy list is empty, reading database");
                None
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Pharmacy cache read failed, reading database: {}", e);
                None
            }
        }
    }
}

impl<R: PharmacyStore, C: PharmacyListCache> PharmacySearch for PharmacySearchService<R, C> {
    async fn search_pharmacy_list(&self) -> Result<Vec<Pharmacy>, SearchError> {
        if let Some(cache) = &self.cache {
            if let Some(pharmacies) = self.search_cache(cache).await {
                return Ok(pharmacies);
            }
        }

        let pharmacies = self.store.find_all().await?;

        if let Some(cache) = &self.cache {
            if !pharmacies.is_empty() {
                if let Err(e) = cache.set_pharmacies(&pharmacies).await {
                    tracing::warn!("Failed to populate pharmacy cache: {}", e);
                }
            }
        }

        Ok(pharmacies)
    }

    async fn is_healthy(&self) -> bool {
        self.store.health_check().await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        pharmacies: Mutex<Vec<Pharmacy>>,
        reads: AtomicUsize,
    }

    impl MemoryStore {
        fn with(pharmacies: Vec<Pharmacy>) -> Self {
            Self {
                pharmacies: Mutex::new(pharmacies),
                reads: AtomicUsize::new(0),
            }
        }
    }

    impl PharmacyStore for MemoryStore {
        async fn find_all(&self) -> Result<Vec<Pharmacy>, PostgresError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.pharmacies.lock().unwrap().clone())
        }

        async fn save_all(&self, pharmacies: &[Pharmacy]) -> Result<u64, PostgresError> {
            self.pharmacies.lock().unwrap().extend_from_slice(pharmacies);
            Ok(pharmacies.len() as u64)
        }

        async fn health_check(&self) -> Result<bool, PostgresError> {
            Err(PostgresError::SqlxError(sqlx::Error::PoolTimedOut))
        }
    }

    #[derive(Default)]
    struct MemoryCache {
        stored: Mutex<Option<Vec<Pharmacy>>>,
        broken: bool,
        writes: AtomicUsize,
    }

    impl MemoryCache {
        fn holding(pharmacies: Vec<Pharmacy>) -> Self {
            Self {
                stored: Mutex::new(Some(pharmacies)),
                ..Default::default()
            }
        }

        fn broken() -> Self {
            Self {
                broken: true,
                ..Default::default()
            }
        }

        fn redis_down() -> CacheError {
            CacheError::RedisError(redis::RedisError::from((
                redis::ErrorKind::IoError,
                "connection refused",
            )))
        }
    }

    impl PharmacyListCache for MemoryCache {
        async fn get_pharmacies(&self) -> Result<Option<Arc<Vec<Pharmacy>>>, CacheError> {
            if self.broken {
                return Err(Self::redis_down());
            }
            Ok(self.stored.lock().unwrap().clone().map(Arc::new))
        }

        async fn set_pharmacies(&self, pharmacies: &[Pharmacy]) -> Result<(), CacheError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.broken {
                return Err(Self::redis_down());
            }
            *self.stored.lock().unwrap() = Some(pharmacies.to_vec());
            Ok(())
        }

        async fn invalidate(&self) -> Result<(), CacheError> {
            *self.stored.lock().unwrap() = None;
            Ok(())
        }
    }

    fn stored_pharmacies() -> Vec<Pharmacy> {
        vec![
            Pharmacy::new("A", "a", 37.5, 127.0),
            Pharmacy::new("B", "b", 35.1, 129.0),
        ]
    }

    fn service(
        store: MemoryStore,
        cache: Option<MemoryCache>,
    ) -> PharmacySearchService<MemoryStore, MemoryCache> {
        PharmacySearchService::new(Arc::new(store), cache.map(Arc::new))
    }

    #[test]
    fn test_in_memory_search_returns_everything() {
        let search = InMemoryPharmacySearch::new(stored_pharmacies());

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();
        assert_eq!(result, stored_pharmacies());
        assert!(tokio_test::block_on(search.is_healthy()));
    }

    #[test]
    fn test_cache_hit_skips_store() {
        let cached = vec![Pharmacy::new("Cached", "c", 37.5, 127.0)];
        let search = service(MemoryStore::with(stored_pharmacies()), Some(MemoryCache::holding(cached.clone())));

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();

        assert_eq!(result, cached);
        assert_eq!(search.store.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_cache_miss_reads_store_and_refills() {
        let search = service(MemoryStore::with(stored_pharmacies()), Some(MemoryCache::default()));

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();

        assert_eq!(result, stored_pharmacies());
        let cache = search.cache.as_ref().unwrap();
        assert_eq!(*cache.stored.lock().unwrap(), Some(stored_pharmacies()));

        // Second search is served from the refilled cache
        tokio_test::block_on(search.search_pharmacy_list()).unwrap();
        assert_eq!(search.store.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cache_error_falls_back_to_store() {
        let search = service(MemoryStore::with(stored_pharmacies()), Some(MemoryCache::broken()));

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();

        assert_eq!(result, stored_pharmacies());
        assert_eq!(search.store.reads.load(Ordering::SeqCst), 1);
        // Refill was attempted and its failure swallowed
        assert_eq!(search.cache.as_ref().unwrap().writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_cached_list_is_a_miss() {
        let search = service(MemoryStore::with(stored_pharmacies()), Some(MemoryCache::holding(vec![])));

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();

        assert_eq!(result, stored_pharmacies());
        assert_eq!(search.store.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_empty_store_is_not_cached() {
        let search = service(MemoryStore::default(), Some(MemoryCache::default()));

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();

        assert!(result.is_empty());
        assert_eq!(search.cache.as_ref().unwrap().writes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_without_cache_reads_store() {
        let search = service(MemoryStore::with(stored_pharmacies()), None);

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();

        assert_eq!(result, stored_pharmacies());
    }

    #[test]
    fn test_reload_invalidates_cached_list() {
        let search = service(
            MemoryStore::with(stored_pharmacies()),
            Some(MemoryCache::holding(stored_pharmacies())),
        );
        let added = Pharmacy::new("New", "n", 37.51, 127.0);

        let saved = tokio_test::block_on(search.reload(&[added.clone()])).unwrap();
        assert_eq!(saved, 1);

        let result = tokio_test::block_on(search.search_pharmacy_list()).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result.contains(&added));
    }

    #[test]
    fn test_unhealthy_store() {
        let search = service(MemoryStore::default(), None);

        assert!(!tokio_test::block_on(search.is_healthy()));
    }
}
