//! Overlay context propagation.
//!
//! The hosting map provides an [`OverlayContext`] under a stable
//! [`ContextKey`]; overlay components consume it and call
//! [`get_overlay_props`] to turn their anchor coordinate into `top`/`left`
//! pixel placement. The actual geo-to-pixel conversion is an injected
//! capability ([`OffsetResolver`]), never computed here.

use crate::core::geo::{LatLng, Point};
use crate::core::state::MapState;
use crate::prelude::HashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

static OVERLAY_KEY: Lazy<ContextKey> = Lazy::new(ContextKey::unique);

/// Identity token locating a context value within a provider tree.
///
/// Keys are opaque; providers and consumers agree on a channel by sharing
/// the same key value, not by naming it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContextKey(u64);

impl ContextKey {
    /// Allocates a fresh key, distinct from every key handed out before
    pub fn unique() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }

    /// The process-wide key for the overlay context channel.
    ///
    /// Allocated once on first access and stable until process exit.
    pub fn overlay() -> Self {
        *OVERLAY_KEY
    }
}

/// Computed placement of an overlay in container pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayAnchor {
    pub top: f64,
    pub left: f64,
}

impl OverlayAnchor {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Capability that turns a coordinate plus a pixel offset into an anchor.
///
/// Injected by the hosting framework; typically closes over live viewport
/// state, so it is shared rather than cloned.
pub type OffsetResolver = Arc<dyn Fn(&LatLng, Point) -> OverlayAnchor + Send + Sync>;

/// Context value propagated to overlay components
#[derive(Clone, Default)]
pub struct OverlayContext {
    /// Offset-resolution capability; absent until the host map installs one
    pub offset_resolver: Option<OffsetResolver>,
    /// Current view of the hosting map
    pub map_state: MapState,
    /// Resolved placement, set by [`get_overlay_props`]
    pub anchor: Option<OverlayAnchor>,
}

impl OverlayContext {
    /// Creates a context for the given map state, with no resolver installed
    pub fn new(map_state: MapState) -> Self {
        Self {
            offset_resolver: None,
            map_state,
            anchor: None,
        }
    }

    /// Installs the offset-resolution capability
    pub fn with_offset_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&LatLng, Point) -> OverlayAnchor + Send + Sync + 'static,
    {
        self.offset_resolver = Some(Arc::new(resolver));
        self
    }

    /// Replaces the map state
    pub fn with_map_state(mut self, map_state: MapState) -> Self {
        self.map_state = map_state;
        self
    }

    /// Resolves rendering props for an overlay anchored at `lat_lng`.
    ///
    /// Method form of [`get_overlay_props`].
    pub fn resolve_props(&self, lat_lng: Option<LatLng>, offset: Option<Point>) -> OverlayContext {
        get_overlay_props(self, lat_lng, offset)
    }
}

// Fn trait objects don't implement Debug, so this is spelled out
impl fmt::Debug for OverlayContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayContext")
            .field("offset_resolver", &self.offset_resolver.is_some())
            .field("map_state", &self.map_state)
            .field("anchor", &self.anchor)
            .finish()
    }
}

/// Computes rendering props for an overlay anchored at a geographic
/// coordinate.
///
/// Returns a clone of the context unchanged when it carries no offset
/// resolver or when no coordinate is supplied; otherwise returns a copy
/// with the anchor recomputed through the resolver. The pixel offset
/// defaults to `(0, 0)`. A panicking resolver propagates to the caller.
pub fn get_overlay_props(
    context: &OverlayContext,
    lat_lng: Option<LatLng>,
    offset: Option<Point>,
) -> OverlayContext {
    let resolver = match (&context.offset_resolver, lat_lng) {
        (Some(resolver), Some(_)) => resolver,
        _ => {
            log::trace!("overlay props passthrough: no resolver or no coordinate");
            return context.clone();
        }
    };

    // Falls back to the view center when no coordinate is given; the guard
    // above currently makes that branch unreachable.
    let effective = lat_lng.unwrap_or(context.map_state.center);
    let anchor = resolver(&effective, offset.unwrap_or_default());
    log::debug!(
        "overlay at ({:.6}, {:.6}) -> top {:.1}, left {:.1}",
        effective.lat,
        effective.lng,
        anchor.top,
        anchor.left
    );

    let mut resolved = context.clone();
    resolved.anchor = Some(anchor);
    resolved
}

/// Provider-side storage mapping context keys to context values
pub struct ContextRegistry {
    entries: HashMap<ContextKey, OverlayContext>,
}

impl ContextRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::default(),
        }
    }

    /// Provides a context under the given key, replacing any previous value
    pub fn provide(&mut self, key: ContextKey, context: OverlayContext) {
        self.entries.insert(key, context);
    }

    /// Looks up the context provided under the given key
    pub fn consume(&self, key: ContextKey) -> Option<&OverlayContext> {
        self.entries.get(&key)
    }

    pub fn remove(&mut self, key: ContextKey) {
        self.entries.remove(&key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ContextRegistry {
    fn default() -> Self {
        Self::new()
    }
}
