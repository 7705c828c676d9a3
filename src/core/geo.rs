use crate::MapError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Latitude limit of the square Web Mercator world
const MAX_LATITUDE: f64 = 85.0511287798;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat >= -90.0
            && self.lat <= 90.0
            && self.lng >= -180.0
            && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the displayable range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl FromStr for LatLng {
    type Err = MapError;

    /// Parses `"lat, lng"` text, rejecting malformed or out-of-range input.
    ///
    /// This is the strict counterpart of [`crate::input::normalize::lat_lng`],
    /// which never rejects anything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let lat_text = parts.next().unwrap_or("");
        let lng_text = parts
            .next()
            .ok_or_else(|| MapError::ParseError(format!("expected \"lat, lng\", got {:?}", s)))?;
        if parts.next().is_some() {
            return Err(MapError::ParseError(format!(
                "too many components in coordinate: {:?}",
                s
            )));
        }

        let lat: f64 = lat_text
            .trim()
            .parse()
            .map_err(|_| MapError::ParseError(format!("invalid latitude: {:?}", lat_text)))?;
        let lng: f64 = lng_text
            .trim()
            .parse()
            .map_err(|_| MapError::ParseError(format!("invalid longitude: {:?}", lng_text)))?;

        let coord = LatLng::new(lat, lng);
        if !coord.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "({}, {})",
                coord.lat, coord.lng
            )));
        }
        Ok(coord)
    }
}

/// Represents a point in screen pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
