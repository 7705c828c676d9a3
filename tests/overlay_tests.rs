use overlet::prelude::*;

/// Integration tests for the full overlay flow: a host provides a context,
/// a component normalizes its anchor input and resolves placement props.
#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Stand-in for a host viewport: linear geo-to-pixel conversion around
    /// the view center.
    fn host_context() -> OverlayContext {
        let state = MapState::new(
            LatLng::new(37.7749, -122.4194), // San Francisco
            12.0,
            Point::new(1024.0, 768.0),
        );
        let view = state.clone();
        OverlayContext::new(state).with_offset_resolver(move |coord, offset| {
            let px_per_degree = 100.0;
            let left =
                view.size.x / 2.0 + (coord.lng - view.center.lng) * px_per_degree + offset.x;
            let top = view.size.y / 2.0 - (coord.lat - view.center.lat) * px_per_degree + offset.y;
            OverlayAnchor::new(top, left)
        })
    }

    #[test]
    fn test_provide_resolve_consume_flow() {
        let mut registry = ContextRegistry::new();
        registry.provide(ContextKey::overlay(), host_context());

        let context = registry.consume(ContextKey::overlay()).unwrap();

        // Overlay anchored at the view center sits in the middle of the screen
        let anchor_input = lat_lng("37.7749, -122.4194");
        let coord = match anchor_input {
            LatLngInput::Pair([lat, lng]) => LatLng::new(lat, lng),
            other => panic!("expected pair, got {:?}", other),
        };

        let resolved = get_overlay_props(context, Some(coord), None);
        let anchor = resolved.anchor.unwrap();
        assert!((anchor.left - 512.0).abs() < 1e-6);
        assert!((anchor.top - 384.0).abs() < 1e-6);
    }

    #[test]
    fn test_pixel_offset_shifts_anchor() {
        let context = host_context();
        let center = context.map_state.center;

        let plain = context.resolve_props(Some(center), None).anchor.unwrap();
        let shifted = context
            .resolve_props(Some(center), Some(Point::new(10.0, -20.0)))
            .anchor
            .unwrap();

        assert!((shifted.left - plain.left - 10.0).abs() < 1e-6);
        assert!((shifted.top - plain.top + 20.0).abs() < 1e-6);
    }

    #[test]
    fn test_passthrough_leaves_context_intact() {
        let context = host_context();

        let resolved = context.resolve_props(None, Some(Point::new(5.0, 5.0)));
        assert!(resolved.anchor.is_none());
        assert_eq!(resolved.map_state, context.map_state);

        let bare = OverlayContext::new(MapState::default());
        let resolved = bare.resolve_props(Some(LatLng::new(1.0, 1.0)), None);
        assert!(resolved.anchor.is_none());
    }

    #[test]
    fn test_strict_input_feeds_resolver() {
        let context = host_context();

        let coord = LatLngInput::from("37.8, -122.4").resolve().unwrap();
        let resolved = context.resolve_props(Some(coord), None);
        assert!(resolved.anchor.is_some());

        // Lenient normalization keeps malformed text as NaN instead
        match lat_lng("north, -122.4") {
            LatLngInput::Pair([lat, lng]) => {
                assert!(lat.is_nan());
                assert_eq!(lng, -122.4);
            }
            other => panic!("expected pair, got {:?}", other),
        }
    }

    #[test]
    fn test_overlay_key_stable_across_threads() {
        let key = ContextKey::overlay();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(ContextKey::overlay))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), key);
        }
    }

    #[test]
    fn test_map_state_serde_roundtrip() {
        let state = MapState::new(
            LatLng::new(51.5074, -0.1278),
            10.0,
            Point::new(800.0, 600.0),
        );

        let json = serde_json::to_string(&state).unwrap();
        let back: MapState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_dimension_flow() {
        // Dimensions pass through untouched whatever their shape
        for raw in ["120", "-0.5", "4rem", ""] {
            assert_eq!(dimension(raw), Dimension::Text(raw.to_string()));
        }
        assert_eq!(dimension(64.0), Dimension::Pixels(64.0));

        assert!(dimension("120").is_numeric());
        assert!(!dimension("4rem").is_numeric());
    }
}
