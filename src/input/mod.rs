pub mod normalize;

pub use normalize::{dimension, is_bare_number, lat_lng, Dimension, LatLngInput};
