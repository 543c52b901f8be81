use serde::Deserialize;
use std::env;

use stayra_core::RoomSelection;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub booking_rules: BookingRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

/// Tunables of the allocation loop.
#[derive(Debug, Deserialize, Clone)]
pub struct BookingRules {
    #[serde(default = "default_room_max")]
    pub room_max: i32,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_selection")]
    pub room_selection: RoomSelection,
}

fn default_room_max() -> i32 {
    1000
}

fn default_max_attempts() -> u32 {
    32
}

fn default_selection() -> RoomSelection {
    RoomSelection::Random
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `STAYRA__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("STAYRA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
