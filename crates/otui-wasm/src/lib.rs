//! WASM bridge: mounts the OTUI preview into a browser DOM container.
//!
//! Compiled via `wasm-pack build --target web`. The host editor owns the
//! text surface and the debounce; it calls `render` with the full current
//! source on every settled edit. Each call is self-contained: the previous
//! preview is discarded wholesale and rebuilt from scratch.

mod dom;

use otui_core::parse_document;
use otui_render::build_preview;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// The preview orchestrator: one instance per preview container.
#[wasm_bindgen]
pub struct OtuiPreview {
    container: Element,
}

#[wasm_bindgen]
impl OtuiPreview {
    /// Bind an orchestrator to the preview container element.
    #[wasm_bindgen(constructor)]
    pub fn new(container: Element) -> OtuiPreview {
        console_error_panic_hook_setup();
        OtuiPreview { container }
    }

    /// Re-parse the full source and replace the container's children with
    /// the rendered widget tree, or on structural failure with the
    /// failure message as preformatted text.
    /// Returns `true` when a widget tree was mounted.
    pub fn render(&self, source: &str) -> bool {
        self.container.set_inner_html("");

        let Some(document) = self.container.owner_document() else {
            return false;
        };

        let root = parse_document(source);
        match build_preview(&root) {
            Ok(visual) => match dom::mount(&document, &visual) {
                Ok(element) => self.container.append_child(&element).is_ok(),
                Err(err) => {
                    web_sys::console::error_1(&err);
                    false
                }
            },
            Err(message) => {
                log::debug!("preview build failed: {message}");
                self.show_error(&document, &message);
                false
            }
        }
    }
}

// ─── Private helpers ─────────────────────────────────────────────────────

impl OtuiPreview {
    fn show_error(&self, document: &Document, message: &str) {
        let Ok(pre) = document.create_element("pre") else {
            return;
        };
        let _ = pre.set_attribute("style", "color: red;");
        pre.set_text_content(Some(message));
        let _ = self.container.append_child(&pre);
    }
}

// ─── Standalone helpers (no container needed) ────────────────────────────

/// Parse source and return the attribute tree as JSON for tree-inspector
/// panes: `{"ok":true,"tree":{...}}`. Parsing is total, so the error arm
/// only covers serialization itself.
#[wasm_bindgen]
pub fn parse_to_json(source: &str) -> String {
    let root = parse_document(source);
    match serde_json::to_string(&root) {
        Ok(json) => format!(r#"{{"ok":true,"tree":{json}}}"#),
        Err(e) => format!(r#"{{"ok":false,"error":"Serialization error: {e}"}}"#),
    }
}

/// Render source to an HTML fragment without touching the DOM; the
/// headless counterpart of [`OtuiPreview::render`], with the same
/// error-display policy.
#[wasm_bindgen]
pub fn render_to_html(source: &str) -> String {
    let root = parse_document(source);
    match build_preview(&root) {
        Ok(visual) => otui_render::emit_html(&visual),
        Err(message) => format!(
            "<pre style=\"color: red;\">{}</pre>\n",
            otui_render::html::escape_text(&message)
        ),
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("OTUI preview panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
