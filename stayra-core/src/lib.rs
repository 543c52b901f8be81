pub mod allocator;
pub mod error;
pub mod memory;
pub mod repository;

pub use allocator::{AllocatorConfig, BookingAllocator, RoomSelection};
pub use error::{AllocationError, StoreError};
pub use memory::{MemoryHotelDirectory, MemoryReservationStore};
pub use repository::{HotelDirectory, ReservationStore};
