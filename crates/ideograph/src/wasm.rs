//! WebAssembly bindings for Ideograph
//!
//! Browser-friendly wrappers around the engine: a host page feeds a
//! command script in and gets the exported SVG (or a JSON state summary)
//! back. All functions are stateless string-in/string-out so they need no
//! JS-side object lifetime management.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::Theme;
#[cfg(target_arch = "wasm32")]
use crate::map::{Editor, EXPORT_FILENAME, EXPORT_MIME};
#[cfg(target_arch = "wasm32")]
use crate::script::run_script;

/// Initialize the WASM module
///
/// Installs the panic hook and console logging for readable errors in
/// the browser.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Run a command script and export the resulting diagram as SVG
///
/// # Arguments
/// * `script` - editor commands, one per line (e.g. `add 1 "Branch A"`)
/// * `theme` - "light" or "dark"
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn render_script_svg(script: &str, theme: &str) -> Result<String, JsValue> {
    let theme = Theme::from_str(theme)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown theme: {}. Use 'light' or 'dark'", theme)))?;

    let mut editor = Editor::with_theme(theme);
    run_script(&mut editor, script).map_err(|e| JsValue::from_str(&format!("{}", e)))?;
    editor.render();

    editor
        .export_svg()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))
}

/// Run a command script and return a JSON summary of the final state
///
/// The summary carries node/connection counts, the selection, the
/// viewport, the theme, and any rejected commands.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn inspect_script(script: &str) -> String {
    let mut editor = Editor::new();
    match run_script(&mut editor, script) {
        Ok(report) => {
            let rejections: Vec<String> = report
                .rejections
                .iter()
                .map(|r| format!("{}: {}", r.command, r.error))
                .collect();
            serde_json::json!({
                "node_count": editor.map().node_count(),
                "connection_count": editor.map().connection_count(),
                "selected_parent": editor.map().selected_parent().0,
                "zoom": editor.viewport().zoom(),
                "offset": {
                    "x": editor.viewport().offset().x,
                    "y": editor.viewport().offset().y,
                },
                "theme": editor.theme().to_string(),
                "applied": report.applied,
                "rejections": rejections,
                "error": null,
            })
            .to_string()
        }
        Err(e) => serde_json::json!({
            "error": format!("{}", e),
        })
        .to_string(),
    }
}

/// The default filename a host should suggest for downloads
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn export_filename() -> String {
    EXPORT_FILENAME.to_string()
}

/// The MIME type of the exported document
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn export_mime() -> String {
    EXPORT_MIME.to_string()
}
