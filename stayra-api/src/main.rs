use std::net::SocketAddr;
use std::sync::Arc;

use stayra_api::{app, state::AuthConfig, AppState};
use stayra_core::{AllocatorConfig, BookingAllocator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stayra_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = stayra_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Stayra API on port {}", config.server.port);

    let db = stayra_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let store = Arc::new(stayra_store::PgReservationStore::new(db.pool.clone()));
    let hotels = Arc::new(stayra_store::PgHotelDirectory::new(db.pool.clone()));

    let allocator = BookingAllocator::new(
        store.clone(),
        hotels,
        AllocatorConfig {
            room_max: config.booking_rules.room_max,
            max_attempts: config.booking_rules.max_attempts,
            selection: config.booking_rules.room_selection,
        },
    );

    let app_state = AppState {
        allocator: Arc::new(allocator),
        store,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
