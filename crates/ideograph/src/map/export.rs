//! SVG serialization of a composed scene
//!
//! Produces a standalone vector document: no external references, labels
//! XML-escaped, the live view transform baked into a single group so the
//! file renders exactly like the canvas did at the moment of export.
//! Primitives tagged as decorations (the per-node edit/delete controls)
//! are skipped entirely.

use std::fmt::Write as _;

use super::scene::{Primitive, Scene, Shape};

/// Default filename for the exported document
pub const EXPORT_FILENAME: &str = "mindmap.svg";

/// MIME type of the exported document
pub const EXPORT_MIME: &str = "image/svg+xml";

/// Serialize a scene to a standalone SVG document
pub fn write_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = scene.width,
        h = scene.height
    );
    let _ = writeln!(
        out,
        "  <g transform=\"{}\">",
        scene.transform.to_svg_attr(scene.center())
    );

    for primitive in scene.diagram_primitives() {
        write_primitive(&mut out, primitive);
    }

    let _ = writeln!(out, "  </g>");
    let _ = writeln!(out, "</svg>");
    out
}

fn write_primitive(out: &mut String, primitive: &Primitive) {
    match &primitive.shape {
        Shape::Line {
            from,
            to,
            stroke,
            stroke_width,
        } => {
            let _ = writeln!(
                out,
                "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
                from.x, from.y, to.x, to.y, stroke, stroke_width
            );
        }
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
            stroke_width,
        } => {
            let _ = writeln!(
                out,
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" />",
                center.x, center.y, radius, fill, stroke, stroke_width
            );
        }
        Shape::Label {
            anchor,
            text,
            fill,
            size,
        } => {
            let _ = writeln!(
                out,
                "    <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" dominant-baseline=\"middle\" font-family=\"sans-serif\" font-size=\"{}\" font-weight=\"500\" fill=\"{}\">{}</text>",
                anchor.x,
                anchor.y,
                size,
                fill,
                escape_xml(text)
            );
        }
    }
}

/// Escape the five XML-special characters in label text
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
