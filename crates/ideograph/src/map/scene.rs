//! Drawable-primitive emission for the rendering surface
//!
//! The engine never paints anything itself: it emits a flat list of
//! geometric primitives (lines, circles, labels) plus the current view
//! transform, and a presentation adapter turns those into pixels. Each
//! primitive carries a `decoration` tag marking editor-only affordances
//! (the per-node edit/delete controls); the exporter filters on that tag
//! instead of querying the host's element tree.

use crate::core::{Palette, Point, Theme};

use super::store::MindMap;
use super::viewport::{ViewTransform, Viewport};

/// Canvas width in diagram-space units (the SVG viewBox width)
pub const CANVAS_WIDTH: f64 = 800.0;

/// Canvas height in diagram-space units (the SVG viewBox height)
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Radius of the root node's circle
pub const ROOT_RADIUS: f64 = 60.0;

/// Radius of every non-root node's circle
pub const BRANCH_RADIUS: f64 = 40.0;

/// Radius of the edit/delete control circles
const CONTROL_RADIUS: f64 = 12.0;

/// Horizontal offset of the control circles from the node center
const CONTROL_OFFSET_X: f64 = 45.0;

/// Vertical offset of the control circles from the node center
const CONTROL_OFFSET_Y: f64 = 25.0;

/// Font size of node labels
const LABEL_SIZE: f64 = 14.0;

/// Font size of the control glyphs
const GLYPH_SIZE: f64 = 12.0;

/// A geometric shape the rendering surface knows how to paint
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A straight stroke between two diagram-space points
    Line {
        from: Point,
        to: Point,
        stroke: &'static str,
        stroke_width: f64,
    },
    /// A filled, stroked circle
    Circle {
        center: Point,
        radius: f64,
        fill: &'static str,
        stroke: &'static str,
        stroke_width: f64,
    },
    /// A text label centered on its anchor
    Label {
        anchor: Point,
        text: String,
        fill: &'static str,
        size: f64,
    },
}

/// A shape plus its decoration tag
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    /// True for editor-only affordances, never present in exports
    pub decoration: bool,
}

impl Primitive {
    fn diagram(shape: Shape) -> Self {
        Self {
            shape,
            decoration: false,
        }
    }

    fn decoration(shape: Shape) -> Self {
        Self {
            shape,
            decoration: true,
        }
    }
}

/// A composed frame: primitives, transform, and theme
#[derive(Debug, Clone)]
pub struct Scene {
    /// Primitives in painting order (connections first, then nodes)
    pub primitives: Vec<Primitive>,
    /// The view transform active when the scene was composed
    pub transform: ViewTransform,
    /// The theme the palette was drawn from
    pub theme: Theme,
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
}

impl Scene {
    /// Compose a scene from the current graph, viewport, and theme
    ///
    /// Connections are emitted first so nodes paint over them. Every
    /// non-root node gets its edit/delete controls, tagged as
    /// decorations; the selected parent is emitted with the highlight
    /// fill and a heavier outline.
    pub fn compose(map: &MindMap, viewport: &Viewport, theme: Theme) -> Scene {
        let palette = Palette::for_theme(theme);
        let mut primitives = Vec::new();

        for connection in map.connections() {
            let (Some(from), Some(to)) = (map.node(connection.from), map.node(connection.to))
            else {
                // Endpoints exist at creation time and removal cascades,
                // so a dangling connection cannot be observed here.
                continue;
            };
            primitives.push(Primitive::diagram(Shape::Line {
                from: from.position,
                to: to.position,
                stroke: palette.connection_stroke,
                stroke_width: 2.0,
            }));
        }

        for node in map.nodes() {
            let selected = node.id == map.selected_parent();
            let fill = if selected {
                palette.selected_fill
            } else if node.is_root {
                palette.root_fill
            } else {
                palette.branch_fill
            };

            primitives.push(Primitive::diagram(Shape::Circle {
                center: node.position,
                radius: if node.is_root {
                    ROOT_RADIUS
                } else {
                    BRANCH_RADIUS
                },
                fill,
                stroke: palette.node_stroke,
                stroke_width: if selected { 3.0 } else { 2.0 },
            }));
            primitives.push(Primitive::diagram(Shape::Label {
                anchor: node.position,
                text: node.text.clone(),
                fill: palette.label_fill,
                size: LABEL_SIZE,
            }));

            if !node.is_root {
                push_controls(&mut primitives, node.position, &palette);
            }
        }

        Scene {
            primitives,
            transform: viewport.render_transform(),
            theme,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }

    /// The canvas center, the anchor point of the view transform
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Primitives that belong to the diagram itself
    pub fn diagram_primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| !p.decoration)
    }

    /// Number of editor-only decoration primitives
    pub fn decoration_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.decoration).count()
    }
}

/// Emit the edit and delete affordances for one node
fn push_controls(primitives: &mut Vec<Primitive>, center: Point, palette: &Palette) {
    let controls = [
        (Point::new(CONTROL_OFFSET_X, -CONTROL_OFFSET_Y), "✎"),
        (Point::new(CONTROL_OFFSET_X, CONTROL_OFFSET_Y), "✕"),
    ];
    for (offset, glyph) in controls {
        let anchor = center + offset;
        primitives.push(Primitive::decoration(Shape::Circle {
            center: anchor,
            radius: CONTROL_RADIUS,
            fill: palette.control_fill,
            stroke: palette.node_stroke,
            stroke_width: 1.0,
        }));
        primitives.push(Primitive::decoration(Shape::Label {
            anchor,
            text: glyph.to_string(),
            fill: palette.label_fill,
            size: GLYPH_SIZE,
        }));
    }
}
