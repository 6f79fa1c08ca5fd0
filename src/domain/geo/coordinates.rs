//! Validated decimal-degree coordinates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::distance::distance_km;

/// A point on the globe. Construction validates ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates coordinates, rejecting non-finite or out-of-range values.
    ///
    /// Latitude must lie in [-90, 90], longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::out_of_range("latitude", -90.0, 90.0, latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::out_of_range(
                "longitude",
                -180.0,
                180.0,
                longitude,
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point in kilometers.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Anything with a fixed position.
pub trait GeoTagged {
    fn coordinates(&self) -> Coordinates;
}
