pub mod geo;
pub mod state;

pub use geo::{LatLng, Point};
pub use state::MapState;
