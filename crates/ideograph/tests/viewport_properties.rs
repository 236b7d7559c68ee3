//! Property tests for the viewport controller
//!
//! Whatever sequence of zoom and drag events arrives, the zoom stays
//! inside its bounds and the offset is pinned to the origin at or below
//! native scale.

use proptest::prelude::*;

use ideograph::prelude::*;

#[derive(Debug, Clone)]
enum Event {
    ZoomIn,
    ZoomOut,
    BeginDrag(f64, f64),
    DragTo(f64, f64),
    EndDrag,
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::ZoomIn),
        Just(Event::ZoomOut),
        (-1000.0..1000.0, -1000.0..1000.0).prop_map(|(x, y)| Event::BeginDrag(x, y)),
        (-1000.0..1000.0, -1000.0..1000.0).prop_map(|(x, y)| Event::DragTo(x, y)),
        Just(Event::EndDrag),
    ]
}

fn apply(viewport: &mut Viewport, event: &Event) {
    match event {
        Event::ZoomIn => viewport.zoom_in(),
        Event::ZoomOut => viewport.zoom_out(),
        Event::BeginDrag(x, y) => viewport.begin_drag(Point::new(*x, *y)),
        Event::DragTo(x, y) => viewport.drag_to(Point::new(*x, *y)),
        Event::EndDrag => viewport.end_drag(),
    }
}

proptest! {
    #[test]
    fn zoom_stays_within_bounds(events in prop::collection::vec(event_strategy(), 0..64)) {
        let mut viewport = Viewport::new();
        for event in &events {
            apply(&mut viewport, event);
            prop_assert!(viewport.zoom() >= MIN_ZOOM - 1e-12);
            prop_assert!(viewport.zoom() <= MAX_ZOOM + 1e-12);
        }
    }

    #[test]
    fn zoom_out_to_native_scale_always_resets_offset(
        events in prop::collection::vec(event_strategy(), 0..64)
    ) {
        let mut viewport = Viewport::new();
        for event in &events {
            apply(&mut viewport, event);
            if matches!(event, Event::ZoomOut) && viewport.zoom() <= 1.0 {
                prop_assert_eq!(viewport.offset(), Point::ORIGIN);
            }
        }
    }

    #[test]
    fn drag_never_starts_at_or_below_native_scale(
        events in prop::collection::vec(event_strategy(), 0..64)
    ) {
        let mut viewport = Viewport::new();
        for event in &events {
            let was_dragging = viewport.is_dragging();
            apply(&mut viewport, event);
            if matches!(event, Event::BeginDrag(..)) && viewport.zoom() <= 1.0 {
                prop_assert_eq!(viewport.is_dragging(), was_dragging);
            }
        }
    }

    #[test]
    fn drag_to_is_idempotent(
        events in prop::collection::vec(event_strategy(), 0..32),
        x in -500.0..500.0,
        y in -500.0..500.0,
    ) {
        let mut viewport = Viewport::new();
        for event in &events {
            apply(&mut viewport, event);
        }

        // Replaying the same pointer position never moves the offset
        // further: each drag event fully recomputes it.
        let pointer = Point::new(x, y);
        viewport.drag_to(pointer);
        let once = viewport.offset();
        viewport.drag_to(pointer);
        prop_assert_eq!(viewport.offset(), once);
    }

    #[test]
    fn transform_scale_always_equals_zoom(
        events in prop::collection::vec(event_strategy(), 0..32)
    ) {
        let mut viewport = Viewport::new();
        for event in &events {
            apply(&mut viewport, event);
            let transform = viewport.render_transform();
            prop_assert_eq!(transform.scale, viewport.zoom());
            prop_assert_eq!(transform.translate, viewport.offset());
        }
    }
}
