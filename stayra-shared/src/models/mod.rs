pub mod booking;
pub mod stay;
