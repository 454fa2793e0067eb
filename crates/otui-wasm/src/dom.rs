//! Visual tree → DOM elements.
//!
//! Each visual node becomes one element: containers mount as `div`s
//! carrying `widget <Kind>` classes and inline pixel styles, the
//! text-input primitive mounts as a `textarea`. Children append in order.

use otui_render::html::px;
use otui_render::widget::Element as WidgetElement;
use otui_render::{VisualNode, VisualStyle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement};

/// Create the DOM subtree for one visual node.
pub fn mount(document: &Document, node: &VisualNode) -> Result<Element, JsValue> {
    match &node.element {
        WidgetElement::TextInput { value } => {
            let textarea = document.create_element("textarea")?;
            if let Some(input) = textarea.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                input.set_value(value);
            }
            Ok(textarea)
        }
        WidgetElement::Container { class } => {
            let el = document.create_element("div")?;
            el.set_class_name(&format!("widget {class}"));

            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                apply_style(html, &node.style)?;
            }
            if let Some(text) = &node.text {
                el.set_text_content(Some(text));
            }
            for child in &node.children {
                let mounted = mount(document, child)?;
                el.append_child(&mounted)?;
            }
            Ok(el)
        }
    }
}

fn apply_style(el: &HtmlElement, style: &VisualStyle) -> Result<(), JsValue> {
    let css = el.style();
    set_px(&css, "width", style.width)?;
    set_px(&css, "height", style.height)?;
    set_px(&css, "margin-top", style.margin_top)?;
    set_px(&css, "margin-left", style.margin_left)?;
    set_px(&css, "margin-bottom", style.margin_bottom)?;
    set_px(&css, "margin-right", style.margin_right)?;
    if style.absolute {
        css.set_property("position", "absolute")?;
    }
    set_px(&css, "left", style.left)?;
    set_px(&css, "top", style.top)?;
    Ok(())
}

fn set_px(css: &CssStyleDeclaration, prop: &str, value: Option<f64>) -> Result<(), JsValue> {
    if let Some(v) = value {
        css.set_property(prop, &px(v))?;
    }
    Ok(())
}
