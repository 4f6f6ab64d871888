use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Minimum spacing between hotels in the same city, in meters.
const DEFAULT_PROXIMITY_RADIUS_METERS: f64 = 500.0;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub proximity_radius_meters: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: optional_parsed("PORT", DEFAULT_PORT)?,
            proximity_radius_meters: optional_parsed(
                "PROXIMITY_RADIUS_METERS",
                DEFAULT_PROXIMITY_RADIUS_METERS,
            )?,
        })
    }
}

/// Reads an optional environment variable, falling back to a default when
/// unset and rejecting values that fail to parse.
fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnvVar(name.to_string(), value)),
        Err(_) => Ok(default),
    }
}
