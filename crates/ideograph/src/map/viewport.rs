//! Zoom/pan viewport controller
//!
//! Owns the zoom level and pan offset and turns already-normalized pointer
//! positions into a clamped offset. Panning is only meaningful above
//! native scale: dragging is refused at zoom ≤ 1 and the offset snaps back
//! to the origin whenever zooming out lands at or below 1. Each
//! [`Viewport::drag_to`] call recomputes the offset from the latest
//! pointer position, so dropped intermediate events cause no drift.

use tracing::trace;

use crate::core::Point;

/// Lower zoom bound
pub const MIN_ZOOM: f64 = 0.5;

/// Upper zoom bound
pub const MAX_ZOOM: f64 = 2.0;

/// Zoom change per step
pub const ZOOM_STEP: f64 = 0.2;

/// How a transform change should be presented by the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Animate toward the new transform (idle viewport)
    Animated,
    /// Apply immediately, no animation (mid-drag, avoids input lag)
    Immediate,
}

/// The scale-then-translate transform applied to diagram space
///
/// The scale is anchored at the viewport's center, not the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor (the zoom level)
    pub scale: f64,
    /// Pan offset in screen pixels
    pub translate: Point,
    /// Presentation hint for the rendering surface
    pub transition: Transition,
}

impl ViewTransform {
    /// Apply the transform to a point, anchoring the scale at `center`
    pub fn apply(&self, center: Point, p: Point) -> Point {
        Point::new(
            center.x * (1.0 - self.scale) + self.scale * (p.x + self.translate.x),
            center.y * (1.0 - self.scale) + self.scale * (p.y + self.translate.y),
        )
    }

    /// The equivalent SVG `transform` attribute value
    ///
    /// `translate(c·(1−s)) scale(s) translate(offset)` is the
    /// center-anchored scale followed by the pan, composed right to left
    /// as SVG applies transform lists.
    pub fn to_svg_attr(&self, center: Point) -> String {
        format!(
            "translate({} {}) scale({}) translate({} {})",
            center.x * (1.0 - self.scale),
            center.y * (1.0 - self.scale),
            self.scale,
            self.translate.x,
            self.translate.y
        )
    }
}

/// Zoom/pan state for the canvas
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    offset: Point,
    dragging: bool,
    drag_anchor: Point,
}

impl Viewport {
    /// Create a viewport at native scale with no pan
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            offset: Point::ORIGIN,
            dragging: false,
            drag_anchor: Point::ORIGIN,
        }
    }

    /// Current zoom level, within `[MIN_ZOOM, MAX_ZOOM]`
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current pan offset in screen pixels
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// True while a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Zoom in one step, saturating at [`MAX_ZOOM`]
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        trace!(zoom = self.zoom, "Zoomed in");
    }

    /// Zoom out one step, saturating at [`MIN_ZOOM`]
    ///
    /// Landing at or below native scale resets the pan offset: there is
    /// nothing to pan when the whole diagram fits the canvas.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        if self.zoom <= 1.0 {
            self.offset = Point::ORIGIN;
        }
        trace!(zoom = self.zoom, "Zoomed out");
    }

    /// Start a drag at the given pointer position
    ///
    /// Refused at zoom ≤ 1 (panning disabled at or below native scale).
    pub fn begin_drag(&mut self, pointer: Point) {
        if self.zoom <= 1.0 {
            return;
        }
        self.drag_anchor = pointer - self.offset;
        self.dragging = true;
    }

    /// Move the drag to the given pointer position
    ///
    /// No-op unless a drag is in progress. The offset is fully recomputed
    /// from the pointer and the drag anchor.
    pub fn drag_to(&mut self, pointer: Point) {
        if !self.dragging {
            return;
        }
        self.offset = pointer - self.drag_anchor;
    }

    /// End the drag; always safe to call (also fired on pointer-leave)
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// The current rendering transform
    ///
    /// Transitions are animated when idle and immediate while dragging.
    pub fn render_transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.zoom,
            translate: self.offset,
            transition: if self.dragging {
                Transition::Immediate
            } else {
                Transition::Animated
            },
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_saturates_at_max() {
        let mut viewport = Viewport::new();
        for _ in 0..10 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom(), MAX_ZOOM);
    }

    #[test]
    fn test_zoom_out_saturates_at_min_and_resets_offset() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.zoom_in();
        viewport.begin_drag(Point::new(10.0, 10.0));
        viewport.drag_to(Point::new(60.0, 40.0));
        viewport.end_drag();
        assert_ne!(viewport.offset(), Point::ORIGIN);

        for _ in 0..10 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom(), MIN_ZOOM);
        assert_eq!(viewport.offset(), Point::ORIGIN);
    }

    #[test]
    fn test_zoom_out_to_native_scale_resets_offset() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.begin_drag(Point::ORIGIN);
        viewport.drag_to(Point::new(25.0, -10.0));
        viewport.end_drag();
        assert_ne!(viewport.offset(), Point::ORIGIN);

        viewport.zoom_out();
        assert!(viewport.zoom() <= 1.0);
        assert_eq!(viewport.offset(), Point::ORIGIN);
    }

    #[test]
    fn test_begin_drag_refused_at_native_scale() {
        let mut viewport = Viewport::new();
        viewport.begin_drag(Point::new(5.0, 5.0));
        assert!(!viewport.is_dragging());

        viewport.drag_to(Point::new(50.0, 50.0));
        assert_eq!(viewport.offset(), Point::ORIGIN);
    }

    #[test]
    fn test_begin_drag_allowed_above_native_scale() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.zoom_in();
        viewport.begin_drag(Point::new(5.0, 5.0));
        assert!(viewport.is_dragging());
    }

    #[test]
    fn test_drag_offset_follows_pointer() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.begin_drag(Point::new(100.0, 100.0));
        viewport.drag_to(Point::new(130.0, 90.0));
        assert_eq!(viewport.offset(), Point::new(30.0, -10.0));

        // Skipping intermediate events does not accumulate error: the
        // offset depends only on the latest pointer position.
        viewport.drag_to(Point::new(150.0, 150.0));
        assert_eq!(viewport.offset(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_drag_to_without_begin_is_noop() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.drag_to(Point::new(40.0, 40.0));
        assert_eq!(viewport.offset(), Point::ORIGIN);
    }

    #[test]
    fn test_end_drag_is_unconditional() {
        let mut viewport = Viewport::new();
        viewport.end_drag();
        assert!(!viewport.is_dragging());

        viewport.zoom_in();
        viewport.begin_drag(Point::ORIGIN);
        viewport.end_drag();
        assert!(!viewport.is_dragging());
    }

    #[test]
    fn test_transition_mode_tracks_dragging() {
        let mut viewport = Viewport::new();
        assert_eq!(viewport.render_transform().transition, Transition::Animated);

        viewport.zoom_in();
        viewport.begin_drag(Point::ORIGIN);
        assert_eq!(
            viewport.render_transform().transition,
            Transition::Immediate
        );

        viewport.end_drag();
        assert_eq!(viewport.render_transform().transition, Transition::Animated);
    }

    #[test]
    fn test_transform_apply_is_center_anchored() {
        let transform = ViewTransform {
            scale: 2.0,
            translate: Point::ORIGIN,
            transition: Transition::Animated,
        };
        let center = Point::new(400.0, 300.0);
        // The center itself is a fixed point of a center-anchored scale.
        assert_eq!(transform.apply(center, center), center);
        // A point left of center moves further left when scaling up.
        let p = transform.apply(center, Point::new(300.0, 300.0));
        assert_eq!(p, Point::new(200.0, 300.0));
    }

    #[test]
    fn test_transform_svg_attr() {
        let transform = ViewTransform {
            scale: 2.0,
            translate: Point::new(10.0, -5.0),
            transition: Transition::Animated,
        };
        let attr = transform.to_svg_attr(Point::new(400.0, 300.0));
        assert_eq!(attr, "translate(-400 -300) scale(2) translate(10 -5)");
    }
}
