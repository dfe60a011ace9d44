// Service exports
pub mod cache;
pub mod direction;
pub mod postgres;
pub mod search;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use direction::DirectionService;
pub use postgres::{PharmacyRepository, PostgresError};
pub use search::{
    InMemoryPharmacySearch, PharmacyListCache, PharmacySearch, PharmacySearchService,
    PharmacyStore, SearchError,
};
