use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use stayra_shared::{Booking, NewBooking, StayRange};

/// Storage boundary for booking records.
///
/// `insert_booking` must be atomic with respect to the non-overlap invariant:
/// if a concurrent insert claims the same `(hotel_id, room_number)` for an
/// overlapping range, exactly one insert succeeds and the loser gets
/// `StoreError::Conflict`.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Any stored booking for the same hotel and room whose stay overlaps
    /// the requested one.
    async fn find_conflicting(
        &self,
        hotel_id: Uuid,
        room_number: i32,
        stay: &StayRange,
    ) -> Result<Option<Booking>, StoreError>;

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking, StoreError>;

    async fn list_for_hotel(&self, hotel_id: Uuid) -> Result<Vec<Booking>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Booking>, StoreError>;

    async fn get(&self, booking_id: Uuid) -> Result<Option<Booking>, StoreError>;
}

/// Existence check against the hotel catalog. Hotel data itself is owned
/// elsewhere; the allocator only needs to know the reference is valid.
#[async_trait]
pub trait HotelDirectory: Send + Sync {
    async fn hotel_exists(&self, hotel_id: Uuid) -> Result<bool, StoreError>;
}
