pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod hotel_repo;

pub use booking_repo::PgReservationStore;
pub use database::DbClient;
pub use hotel_repo::PgHotelDirectory;
