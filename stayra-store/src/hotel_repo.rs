use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use stayra_core::{HotelDirectory, StoreError};

/// Existence check against the hotels table. Hotel data is owned by the
/// catalog service; this store only answers whether a reference is valid.
pub struct PgHotelDirectory {
    pool: PgPool,
}

impl PgHotelDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HotelDirectory for PgHotelDirectory {
    async fn hotel_exists(&self, hotel_id: Uuid) -> Result<bool, StoreError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM hotels WHERE id = $1)")
                .bind(hotel_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(exists)
    }
}
