pub mod models;

pub use models::booking::{Booking, NewBooking};
pub use models::stay::{InvalidStayError, StayRange};
