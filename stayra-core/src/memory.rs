use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::StoreError;
use crate::repository::{HotelDirectory, ReservationStore};
use stayra_shared::{Booking, NewBooking, StayRange};

/// In-memory reservation store for tests and local development.
///
/// The conflict re-check in `insert_booking` runs under the same mutex guard
/// as the insert itself, so check-and-insert is atomic and concurrent losers
/// get `StoreError::Conflict` just like the Postgres store.
#[derive(Default)]
pub struct MemoryReservationStore {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn find_conflicting(
        &self,
        hotel_id: Uuid,
        room_number: i32,
        stay: &StayRange,
    ) -> Result<Option<Booking>, StoreError> {
        let bookings = self.bookings.lock().await;
        Ok(bookings
            .iter()
            .find(|b| {
                b.hotel_id == hotel_id && b.room_number == room_number && b.stay().overlaps(stay)
            })
            .cloned())
    }

    async fn insert_booking(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        let mut bookings = self.bookings.lock().await;
        let taken = bookings.iter().any(|b| {
            b.hotel_id == booking.hotel_id
                && b.room_number == booking.room_number
                && b.stay().overlaps(&booking.stay)
        });
        if taken {
            return Err(StoreError::Conflict);
        }
        let stored = Booking {
            id: Uuid::new_v4(),
            hotel_id: booking.hotel_id,
            user_id: booking.user_id,
            check_in: booking.stay.check_in(),
            check_out: booking.stay.check_out(),
            room_number: booking.room_number,
            created_at: Utc::now(),
        };
        bookings.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_hotel(&self, hotel_id: Uuid) -> Result<Vec<Booking>, StoreError> {
        let bookings = self.bookings.lock().await;
        Ok(bookings
            .iter()
            .filter(|b| b.hotel_id == hotel_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self.bookings.lock().await.clone())
    }

    async fn get(&self, booking_id: Uuid) -> Result<Option<Booking>, StoreError> {
        let bookings = self.bookings.lock().await;
        Ok(bookings.iter().find(|b| b.id == booking_id).cloned())
    }
}

/// Fixed set of known hotel ids.
#[derive(Default)]
pub struct MemoryHotelDirectory {
    hotels: HashSet<Uuid>,
}

impl MemoryHotelDirectory {
    pub fn with_hotels(hotels: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            hotels: hotels.into_iter().collect(),
        }
    }
}

#[async_trait]
impl HotelDirectory for MemoryHotelDirectory {
    async fn hotel_exists(&self, hotel_id: Uuid) -> Result<bool, StoreError> {
        Ok(self.hotels.contains(&hotel_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stay(check_in: &str, check_out: &str) -> StayRange {
        StayRange::new(
            check_in.parse::<NaiveDate>().unwrap(),
            check_out.parse::<NaiveDate>().unwrap(),
        )
        .unwrap()
    }

    fn new_booking(hotel_id: Uuid, room_number: i32, range: StayRange) -> NewBooking {
        NewBooking {
            hotel_id,
            user_id: "user-1".to_string(),
            room_number,
            stay: range,
        }
    }

    #[tokio::test]
    async fn insert_rejects_overlapping_same_room() {
        let store = MemoryReservationStore::new();
        let hotel = Uuid::new_v4();

        store
            .insert_booking(new_booking(hotel, 7, stay("2026-04-01", "2026-04-05")))
            .await
            .unwrap();

        let err = store
            .insert_booking(new_booking(hotel, 7, stay("2026-04-03", "2026-04-08")))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Conflict));
    }

    #[tokio::test]
    async fn insert_allows_same_room_different_hotel_or_range() {
        let store = MemoryReservationStore::new();
        let hotel = Uuid::new_v4();

        store
            .insert_booking(new_booking(hotel, 7, stay("2026-04-01", "2026-04-05")))
            .await
            .unwrap();

        // back-to-back on the same room is allowed
        store
            .insert_booking(new_booking(hotel, 7, stay("2026-04-05", "2026-04-09")))
            .await
            .unwrap();

        // same dates in another hotel are unrelated
        store
            .insert_booking(new_booking(Uuid::new_v4(), 7, stay("2026-04-01", "2026-04-05")))
            .await
            .unwrap();

        assert_eq!(store.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn find_conflicting_matches_only_the_probed_room() {
        let store = MemoryReservationStore::new();
        let hotel = Uuid::new_v4();
        let range = stay("2026-04-01", "2026-04-05");

        store
            .insert_booking(new_booking(hotel, 3, range))
            .await
            .unwrap();

        assert!(store
            .find_conflicting(hotel, 3, &range)
            .await
            .unwrap()
            .is_some());
        assert!(store
            .find_conflicting(hotel, 4, &range)
            .await
            .unwrap()
            .is_none());
    }
}
