use uuid::Uuid;

/// Failure modes of the reservation store boundary.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A concurrent insert won the race for the same hotel/room/range slot.
    /// Absorbed by the allocator's retry loop, never surfaced to callers.
    #[error("booking conflicts with an existing reservation")]
    Conflict,

    #[error("reservation store failure: {0}")]
    Backend(String),
}

/// Failure modes of booking allocation.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("invalid booking request: {0}")]
    Validation(String),

    #[error("hotel {0} does not exist")]
    HotelNotFound(Uuid),

    #[error("no room available for the requested dates after {attempts} attempts")]
    CapacityExhausted { attempts: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}
