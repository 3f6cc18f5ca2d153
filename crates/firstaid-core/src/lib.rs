//! Shared domain types and configuration for the first-aid assistant.

pub mod app_config;
pub mod config;
pub mod facility;
pub mod location;
pub mod notice;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use facility::{FacilityRecord, FacilityResultSet};
pub use location::{Coordinates, LocationQuery, UserLocationContext};
pub use notice::{Notice, NoticeLevel, NoticeSink, RecordingNotices};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinates ({lat}, {lon}): {reason}")]
    InvalidCoordinates {
        lat: f64,
        lon: f64,
        reason: &'static str,
    },

    #[error("location query must not be blank")]
    EmptyLocation,

    #[error("facility {field} must not be blank")]
    BlankFacilityField { field: &'static str },
}
