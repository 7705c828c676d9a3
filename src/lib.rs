//! # Overlet
//!
//! Overlay anchoring and input normalization utilities for interactive
//! map UIs, in the Leaflet tradition.
//!
//! An [`OverlayContext`] carries the hosting map's view state together with
//! an injected offset-resolution capability; [`get_overlay_props`] turns a
//! geographic coordinate into `top`/`left` pixel placement for an overlay.
//! The [`input`] module folds heterogeneous user input (coordinate text,
//! numeric pairs, dimension values) into canonical forms.

pub mod context;
pub mod core;
pub mod input;
pub mod prelude;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, Point},
    state::MapState,
};

pub use context::{
    get_overlay_props, ContextKey, ContextRegistry, OffsetResolver, OverlayAnchor, OverlayContext,
};

pub use input::normalize::{dimension, is_bare_number, lat_lng, Dimension, LatLngInput};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
