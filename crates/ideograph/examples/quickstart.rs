//! Build a small mind map and print the exported SVG to stdout.
//!
//! Run with: cargo run --example quickstart

use ideograph::prelude::*;

fn main() -> anyhow::Result<()> {
    let mut editor = Editor::with_theme(Theme::Dark);

    let plan = editor.add_child(ROOT_ID, "Plan")?;
    editor.add_child(ROOT_ID, "Build")?;
    editor.add_child(ROOT_ID, "Ship")?;

    editor.select_parent(plan)?;
    editor.add_to_selection("Scope")?;
    editor.add_to_selection("Estimate")?;

    editor.zoom_in();
    editor.render();

    println!("{}", editor.export_svg()?);
    Ok(())
}
