use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AllocationError, StoreError};
use crate::repository::{HotelDirectory, ReservationStore};
use stayra_shared::{Booking, NewBooking, StayRange};

/// How candidate rooms are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomSelection {
    /// Uniform random probe over `[1, room_max]`, bounded by `max_attempts`.
    Random,
    /// Deterministic scan of rooms `1..=room_max` in order. Slower per call
    /// near full occupancy but immune to probe misses.
    FirstFree,
}

#[derive(Debug, Clone)]
pub struct AllocatorConfig {
    pub room_max: i32,
    pub max_attempts: u32,
    pub selection: RoomSelection,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            room_max: 1000,
            max_attempts: 32,
            selection: RoomSelection::Random,
        }
    }
}

/// Picks a room for a requested stay and persists the booking.
///
/// The store owns atomicity: each attempt is one conflict probe plus one
/// conditional insert, and a lost race surfaces as `StoreError::Conflict`,
/// which just burns an attempt. No lock is held across attempts.
pub struct BookingAllocator {
    store: Arc<dyn ReservationStore>,
    hotels: Arc<dyn HotelDirectory>,
    config: AllocatorConfig,
}

impl BookingAllocator {
    pub fn new(
        store: Arc<dyn ReservationStore>,
        hotels: Arc<dyn HotelDirectory>,
        config: AllocatorConfig,
    ) -> Self {
        Self {
            store,
            hotels,
            config,
        }
    }

    pub async fn allocate(
        &self,
        hotel_id: Uuid,
        user_id: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking, AllocationError> {
        let stay = StayRange::new(check_in, check_out)
            .map_err(|e| AllocationError::Validation(e.to_string()))?;
        if self.config.room_max < 1 {
            return Err(AllocationError::Validation(format!(
                "room_max must be at least 1, got {}",
                self.config.room_max
            )));
        }

        if !self.hotels.hotel_exists(hotel_id).await? {
            return Err(AllocationError::HotelNotFound(hotel_id));
        }

        let budget = match self.config.selection {
            RoomSelection::Random => self.config.max_attempts,
            RoomSelection::FirstFree => self.config.room_max as u32,
        };

        for attempt in 0..budget {
            let room_number = match self.config.selection {
                RoomSelection::Random => {
                    rand::thread_rng().gen_range(1..=self.config.room_max)
                }
                RoomSelection::FirstFree => attempt as i32 + 1,
            };

            if self
                .store
                .find_conflicting(hotel_id, room_number, &stay)
                .await?
                .is_some()
            {
                debug!(%hotel_id, room_number, attempt, "room already booked, trying another");
                continue;
            }

            match self
                .store
                .insert_booking(NewBooking {
                    hotel_id,
                    user_id: user_id.to_string(),
                    room_number,
                    stay,
                })
                .await
            {
                Ok(booking) => {
                    info!(%hotel_id, room_number, booking_id = %booking.id, "booking allocated");
                    return Ok(booking);
                }
                Err(StoreError::Conflict) => {
                    debug!(%hotel_id, room_number, attempt, "lost insert race, trying another");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AllocationError::CapacityExhausted { attempts: budget })
    }
}
