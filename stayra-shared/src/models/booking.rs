use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::stay::StayRange;

/// A confirmed reservation of one room in one hotel for a date range.
///
/// Bookings are immutable once created. The store guarantees that for a fixed
/// `(hotel_id, room_number)` no two bookings overlap on
/// `[check_in, check_out)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_number: i32,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn stay(&self) -> StayRange {
        // check_in < check_out is enforced at creation
        StayRange::new(self.check_in, self.check_out)
            .expect("stored booking has an inverted date range")
    }
}

/// Insert payload handed to the reservation store by the allocator.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub hotel_id: Uuid,
    pub user_id: String,
    pub room_number: i32,
    pub stay: StayRange,
}
