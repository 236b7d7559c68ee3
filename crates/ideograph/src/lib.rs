//! Ideograph - an interactive mind-map engine
//!
//! A tree of labeled nodes is built by attaching children to a selected
//! parent; new children are placed radially around their parent, the
//! canvas can be zoomed and panned, and the visible diagram exports as a
//! standalone SVG with the editor-only controls stripped.
//!
//! # Quick Start
//!
//! ```rust
//! use ideograph::{render_svg, Theme};
//!
//! let script = r#"
//!     add 1 "Branch A"
//!     add 1 "Branch B"
//!     select 2
//!     add 2 "Leaf"
//! "#;
//! let svg = render_svg(script, Theme::Light).unwrap();
//! assert!(svg.contains("Branch A"));
//! ```
//!
//! # Advanced Usage
//!
//! Drive the editor directly for full control:
//!
//! ```rust
//! use ideograph::prelude::*;
//!
//! let mut editor = Editor::new();
//! let branch = editor.add_child(ROOT_ID, "Branch A").unwrap();
//! editor.select_parent(branch).unwrap();
//! editor.add_to_selection("Leaf").unwrap();
//!
//! editor.zoom_in();
//! editor.render();
//! let svg = editor.export_svg().unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod core;
pub mod map;
pub mod script;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Connection, ConnectionId, ErrorKind, MapError, Node, NodeId, Palette, Point, Theme,
    };
    pub use crate::map::{
        Draft, Editor, MindMap, Primitive, Scene, Shape, Transition, ViewTransform, Viewport,
        EXPORT_FILENAME, EXPORT_MIME, MAX_ZOOM, MIN_ZOOM, ROOT_ID,
    };
    pub use crate::script::{run_script, Command, RunReport};
}

use crate::map::Editor;

/// Run a command script and export the resulting diagram as SVG
///
/// This is the simplest way to turn a script into a finished document.
/// Commands the engine rejects (blank labels, unknown ids, deleting the
/// root) are logged and skipped; only a syntax error fails the call.
///
/// # Example
/// ```rust
/// use ideograph::{render_svg, Theme};
///
/// let svg = render_svg("add 1 \"Branch A\"", Theme::Dark).unwrap();
/// assert!(svg.contains("<circle"));
/// ```
pub fn render_svg(script: &str, theme: Theme) -> anyhow::Result<String> {
    let mut editor = Editor::with_theme(theme);
    script::run_script(&mut editor, script)?;
    editor.render();
    Ok(editor.export_svg()?)
}

/// Run a command script and return the resulting editor
///
/// Useful when the final state matters more than the document, e.g. for
/// inspection or further programmatic edits.
///
/// # Example
/// ```rust
/// use ideograph::run;
///
/// let editor = run("add 1 \"A\"; add 1 \"B\"").unwrap();
/// assert_eq!(editor.map().node_count(), 3);
/// assert_eq!(editor.map().connection_count(), 2);
/// ```
pub fn run(script: &str) -> anyhow::Result<Editor> {
    let mut editor = Editor::new();
    script::run_script(&mut editor, script)?;
    editor.render();
    Ok(editor)
}
