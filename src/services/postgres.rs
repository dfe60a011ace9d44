use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

use crate::models::Pharmacy;
use crate::services::search::PharmacyStore;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// PostgreSQL-backed pharmacy repository
///
/// Holds the full pharmacy table. No filtering happens here; ranking is done
/// in memory by the caller.
pub struct PharmacyRepository {
    pool: PgPool,
}

impl PharmacyRepository {
    /// Create a new repository from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new repository from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Number of stored pharmacies
    pub async fn count(&self) -> Result<i64, PostgresError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM pharmacy")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("total"))
    }
}

impl PharmacyStore for PharmacyRepository {
    /// Fetch every pharmacy, in insertion order
    async fn find_all(&self) -> Result<Vec<Pharmacy>, PostgresError> {
        let query = r#"
            SELECT pharmacy_name, pharmacy_address, latitude, longitude
            FROM pharmacy
            ORDER BY id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;

        let pharmacies: Vec<Pharmacy> = rows
            .iter()
            .map(|row| Pharmacy {
                pharmacy_name: row.get("pharmacy_name"),
                pharmacy_address: row.get("pharmacy_address"),
                latitude: row.get("latitude"),
                longitude: row.get("longitude"),
            })
            .collect();

        tracing::debug!("Loaded {} pharmacies from PostgreSQL", pharmacies.len());

        Ok(pharmacies)
    }

    /// Insert pharmacies in a single transaction
    ///
    /// Does not touch the pharmacy list cache; bulk loads should go through
    /// `PharmacySearchService::reload` so cached lists are dropped.
    async fn save_all(&self, pharmacies: &[Pharmacy]) -> Result<u64, PostgresError> {
        let query = r#"
            INSERT INTO pharmacy (pharmacy_name, pharmacy_address, latitude, longitude, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
        "#;

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for pharmacy in pharmacies {
            let result = sqlx::query(query)
                .bind(&pharmacy.pharmacy_name)
                .bind(&pharmacy.pharmacy_address)
                .bind(pharmacy.latitude)
                .bind(pharmacy.longitude)
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;

        tracing::info!("Saved {} pharmacies", inserted);
        Ok(inserted)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
