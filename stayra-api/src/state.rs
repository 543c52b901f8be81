use std::sync::Arc;

use stayra_core::{BookingAllocator, ReservationStore};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<BookingAllocator>,
    pub store: Arc<dyn ReservationStore>,
    pub auth: AuthConfig,
}
