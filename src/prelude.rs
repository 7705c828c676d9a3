//! Prelude module for common overlet types
//!
//! This module re-exports the most commonly used types and functions
//! for easy importing with `use overlet::prelude::*;`

pub use crate::core::{
    geo::{LatLng, Point},
    state::MapState,
};

pub use crate::context::{
    get_overlay_props, ContextKey, ContextRegistry, OffsetResolver, OverlayAnchor, OverlayContext,
};

pub use crate::input::normalize::{
    dimension, is_bare_number, lat_lng, Dimension, LatLngInput,
};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
