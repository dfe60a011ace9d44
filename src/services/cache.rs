use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::models::Pharmacy;
use crate::services::search::PharmacyListCache;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Two-tier cache for the full pharmacy list
///
/// L1 keeps the decoded list in-process so repeated searches share one
/// allocation. L2 is Redis, holding the list as JSON for other instances.
pub struct CacheManager {
    redis: ConnectionManager,
    l1_cache: moka::future::Cache<String, Arc<Vec<Pharmacy>>>,
    ttl_secs: u64,
}

impl CacheManager {
    /// Connect to Redis and build the in-process tier
    pub async fn new(redis_url: &str, l1_size: u64, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let redis = ConnectionManager::new(client).await?;

        let l1_cache = moka::future::CacheBuilder::new(l1_size)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Ok(Self {
            redis,
            l1_cache,
            ttl_secs,
        })
    }
}

impl PharmacyListCache for CacheManager {
    async fn get_pharmacies(&self) -> Result<Option<Arc<Vec<Pharmacy>>>, CacheError> {
        let key = CacheKey::pharmacies();

        if let Some(pharmacies) = self.l1_cache.get(&key).await {
            tracing::trace!("L1 cache hit: {}", key);
            return Ok(Some(pharmacies));
        }

        // ConnectionManager multiplexes; a clone per call avoids serializing callers
        let mut conn = self.redis.clone();
        let json: Option<String> = conn.get(&key).await?;

        let Some(json) = json else {
            tracing::trace!("Cache miss: {}", key);
            return Ok(None);
        };

        let pharmacies: Arc<Vec<Pharmacy>> = Arc::new(serde_json::from_str(&json)?);
        tracing::trace!("L2 cache hit: {} ({} pharmacies)", key, pharmacies.len());

        self.l1_cache.insert(key, Arc::clone(&pharmacies)).await;
        Ok(Some(pharmacies))
    }

    async fn set_pharmacies(&self, pharmacies: &[Pharmacy]) -> Result<(), CacheError> {
        let key = CacheKey::pharmacies();
        let json = serde_json::to_string(pharmacies)?;

        let mut conn = self.redis.clone();
        conn.set_ex::<_, _, ()>(&key, json, self.ttl_secs).await?;

        self.l1_cache.insert(key, Arc::new(pharmacies.to_vec())).await;

        tracing::trace!("Cached {} pharmacies", pharmacies.len());
        Ok(())
    }

    async fn invalidate(&self) -> Result<(), CacheError> {
        let key = CacheKey::pharmacies();
        self.l1_cache.invalidate(&key).await;

        let mut conn = self.redis.clone();
        conn.del::<_, ()>(&key).await?;

        tracing::debug!("Invalidated pharmacy cache");
        Ok(())
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key holding the full pharmacy list
    pub fn pharmacies() -> String {
        "pharmacy:all".to_string()
    }
}
