//! Location inputs for the hospital finder.

use serde::Serialize;

use crate::CoreError;

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    lat: f64,
    lon: f64,
}

impl Coordinates {
    /// Builds a coordinate pair, rejecting non-finite or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] if `lat` is outside
    /// `[-90, 90]` or `lon` is outside `[-180, 180]`.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoreError> {
        let reason = if !lat.is_finite() || !lon.is_finite() {
            Some("values must be finite")
        } else if !(-90.0..=90.0).contains(&lat) {
            Some("latitude must be within [-90, 90]")
        } else if !(-180.0..=180.0).contains(&lon) {
            Some("longitude must be within [-180, 180]")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(CoreError::InvalidCoordinates { lat, lon, reason }),
            None => Ok(Self { lat, lon }),
        }
    }

    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

/// What the user asked to search around: typed text or known coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Text(String),
    Coordinates(Coordinates),
}

impl LocationQuery {
    /// Builds a free-text query, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyLocation`] if the text is blank.
    pub fn text(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyLocation);
        }
        Ok(Self::Text(trimmed.to_string()))
    }

    /// Builds a coordinate query.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinates`] for out-of-range values.
    pub fn coordinates(lat: f64, lon: f64) -> Result<Self, CoreError> {
        Coordinates::new(lat, lon).map(Self::Coordinates)
    }
}

/// The user's own position, known only when device coordinates were supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserLocationContext {
    pub coords: Coordinates,
    pub resolved_address: Option<String>,
}

impl UserLocationContext {
    #[must_use]
    pub fn new(coords: Coordinates, resolved_address: Option<String>) -> Self {
        Self {
            coords,
            resolved_address,
        }
    }

    /// Human-readable label: the resolved address, or the raw coordinates.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.resolved_address {
            Some(address) => address.clone(),
            None => format!("Lat: {}, Lon: {}", self.coords.lat, self.coords.lon),
        }
    }
}
