use overlet::{
    core::{geo::LatLng, geo::Point, state::MapState},
    get_overlay_props, lat_lng, ContextKey, ContextRegistry, LatLngInput, OverlayAnchor,
    OverlayContext,
};

/// Example of anchoring overlays without any UI backend
fn main() -> overlet::Result<()> {
    env_logger::init();

    println!("🗺️ Overlet Overlay Anchor Example");
    println!("=================================");

    // A host map view centered on San Francisco
    let state = MapState::new(
        LatLng::new(37.7749, -122.4194),
        12.0,
        Point::new(1024.0, 768.0),
    );
    println!("✅ Map state created:");
    println!("   Center: {:.4}, {:.4}", state.center.lat, state.center.lng);
    println!("   Zoom: {}", state.zoom);
    println!("   Size: {}x{}", state.size.x, state.size.y);

    // The host injects the geo-to-pixel capability; here a simple linear
    // conversion around the view center stands in for a real viewport.
    let view = state.clone();
    let context = OverlayContext::new(state).with_offset_resolver(move |coord, offset| {
        let px_per_degree = 100.0;
        let left = view.size.x / 2.0 + (coord.lng - view.center.lng) * px_per_degree + offset.x;
        let top = view.size.y / 2.0 - (coord.lat - view.center.lat) * px_per_degree + offset.y;
        OverlayAnchor::new(top, left)
    });

    // Provide the context on the shared overlay channel
    let mut registry = ContextRegistry::new();
    registry.provide(ContextKey::overlay(), context);
    println!("✅ Context provided under the overlay key");

    println!("\n🎯 Anchoring overlays:");

    let anchors = [
        ("Ferry Building", "37.7955, -122.3937"),
        ("Golden Gate Park", "37.7694, -122.4862"),
        ("Twin Peaks", "37.7544, -122.4477"),
    ];

    let context = registry
        .consume(ContextKey::overlay())
        .ok_or("overlay context missing")?;

    for (name, raw) in anchors {
        // User-facing text input, normalized then validated
        let coord = LatLngInput::from(raw).resolve()?;
        let props = get_overlay_props(context, Some(coord), Some(Point::new(0.0, -12.0)));

        if let Some(anchor) = props.anchor {
            println!(
                "   📍 {} - top {:.1}px, left {:.1}px",
                name, anchor.top, anchor.left
            );
        }
    }

    // Lenient normalization never rejects; malformed parts become NaN
    println!("\n🧪 Lenient input normalization:");
    for raw in ["40.7, -74.0", "abc, 5", "40.7"] {
        println!("   {:?} -> {:?}", raw, lat_lng(raw));
    }

    println!("\n✅ Done");
    Ok(())
}
