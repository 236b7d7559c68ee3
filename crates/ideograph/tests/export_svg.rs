//! Integration tests for the export contract

use ideograph::map::write_svg;
use ideograph::prelude::*;
use ideograph::run;

#[test]
fn test_export_matches_live_view_minus_decorations() {
    let mut editor = run("add 1 \"A\"; add 1 \"B\"; select 2; add 2 \"C\"").unwrap();
    let scene = editor.render().clone();

    let svg = editor.export_svg().unwrap();
    assert_eq!(svg, write_svg(&scene));

    // Node and connection counts are unchanged by decoration stripping.
    let node_circles = svg.matches("<circle").count();
    let connection_lines = svg.matches("<line").count();
    assert_eq!(node_circles, editor.map().node_count());
    assert_eq!(connection_lines, editor.map().connection_count());
    assert_eq!(scene.decoration_count(), 3 * 4);
}

#[test]
fn test_export_bakes_in_pan_and_zoom() {
    let mut editor = run("zoom in\ndrag begin 0 0\ndrag to 25 -10\ndrag end").unwrap();
    editor.render();
    let svg = editor.export_svg().unwrap();

    let transform = editor.viewport().render_transform();
    let attr = transform.to_svg_attr(Point::new(400.0, 300.0));
    assert!(svg.contains(&attr));
    assert_eq!(transform.translate, Point::new(25.0, -10.0));
}

#[test]
fn test_export_is_deterministic() {
    let script = "add 1 \"A\"; add 1 \"B\"; zoom in";
    let first = ideograph::render_svg(script, Theme::Dark).unwrap();
    let second = ideograph::render_svg(script, Theme::Dark).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_export_escapes_hostile_labels() {
    let svg = ideograph::render_svg(
        "add 1 \"<script>alert('&')</script>\"",
        Theme::Light,
    )
    .unwrap();
    assert!(!svg.contains("<script>"));
    assert!(svg.contains("&lt;script&gt;"));
    assert!(svg.contains("&amp;"));
    assert!(svg.contains("&apos;"));
}

#[test]
fn test_root_circle_is_larger_than_branches() {
    let svg = ideograph::render_svg("add 1 \"A\"", Theme::Light).unwrap();
    assert!(svg.contains("r=\"60\""));
    assert!(svg.contains("r=\"40\""));
}
