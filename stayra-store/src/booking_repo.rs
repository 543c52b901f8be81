use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use stayra_core::{ReservationStore, StoreError};
use stayra_shared::{Booking, NewBooking, StayRange};

/// `ReservationStore` backed by Postgres.
///
/// Atomicity of check-and-insert is enforced by the `bookings_no_overlap`
/// exclusion constraint (see `migrations/0001_init.sql`): two concurrent
/// inserts for the same hotel/room/overlapping range cannot both commit, and
/// the loser's constraint violation is mapped to `StoreError::Conflict`.
pub struct PgReservationStore {
    pool: PgPool,
}

impl PgReservationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    hotel_id: Uuid,
    user_id: String,
    check_in: chrono::NaiveDate,
    check_out: chrono::NaiveDate,
    room_number: i32,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            hotel_id: row.hotel_id,
            user_id: row.user_id,
            check_in: row.check_in,
            check_out: row.check_out,
            room_number: row.room_number,
            created_at: row.created_at,
        }
    }
}

// exclusion_violation and unique_violation
const CONFLICT_SQLSTATES: [&str; 2] = ["23P01", "23505"];

fn map_insert_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if let Some(code) = db_err.code() {
            if CONFLICT_SQLSTATES.contains(&code.as_ref()) {
                debug!("booking insert lost the race: {}", db_err.message());
                return StoreError::Conflict;
            }
        }
    }
    StoreError::Backend(e.to_string())
}

fn map_query_error(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    async fn find_conflicting(
        &self,
        hotel_id: Uuid,
        room_number: i32,
        stay: &StayRange,
    ) -> Result<Option<Booking>, StoreError> {
        // Same strict half-open predicate as StayRange::overlaps.
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, hotel_id, user_id, check_in, check_out, room_number, created_at
            FROM bookings
            WHERE hotel_id = $1
              AND room_number = $2
              AND check_in < $4
              AND check_out > $3
            LIMIT 1
            "#,
        )
        .bind(hotel_id)
        .bind(room_number)
        .bind(stay.check_in())
        .bind(stay.check_out())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(row.map(Booking::from))
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            INSERT INTO bookings (id, hotel_id, user_id, check_in, check_out, room_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, hotel_id, user_id, check_in, check_out, room_number, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(booking.hotel_id)
        .bind(&booking.user_id)
        .bind(booking.stay.check_in())
        .bind(booking.stay.check_out())
        .bind(booking.room_number)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn list_for_hotel(&self, hotel_id: Uuid) -> Result<Vec<Booking>, StoreError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, hotel_id, user_id, check_in, check_out, room_number, created_at
            FROM bookings
            WHERE hotel_id = $1
            ORDER BY check_in
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn list_all(&self) -> Result<Vec<Booking>, StoreError> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, hotel_id, user_id, check_in, check_out, room_number, created_at
            FROM bookings
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    async fn get(&self, booking_id: Uuid) -> Result<Option<Booking>, StoreError> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, hotel_id, user_id, check_in, check_out, room_number, created_at
            FROM bookings
            WHERE id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_query_error)?;

        Ok(row.map(Booking::from))
    }
}
