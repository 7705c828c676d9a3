use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// The slice of the map view that overlay placement depends on: center,
/// zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapState {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl MapState {
    /// Creates a new map state
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    /// Sets the center of the view, clamping to world bounds
    pub fn set_center(&mut self, center: LatLng) {
        self.center = Self::clamp_center(center);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    fn clamp_center(center: LatLng) -> LatLng {
        LatLng::new(
            LatLng::clamp_lat(center.lat),
            center.lng.clamp(-180.0, 180.0),
        )
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_creation() {
        let state = MapState::new(
            LatLng::new(40.7128, -74.0060),
            10.0,
            Point::new(800.0, 600.0),
        );

        assert_eq!(state.zoom, 10.0);
        assert_eq!(state.center.lat, 40.7128);
        assert_eq!(state.size.x, 800.0);
    }

    #[test]
    fn test_zoom_limits() {
        let mut state = MapState::default();
        state.set_zoom_limits(2.0, 15.0);

        state.set_zoom(1.0); // Below minimum
        assert_eq!(state.zoom, 2.0);

        state.set_zoom(20.0); // Above maximum
        assert_eq!(state.zoom, 15.0);
    }

    #[test]
    fn test_center_clamping() {
        let mut state = MapState::default();
        state.set_center(LatLng::new(90.0, 200.0));

        assert_eq!(state.center.lat, 85.0511287798);
        assert_eq!(state.center.lng, 180.0);
    }
}
