//! Visual tree → HTML fragment.
//!
//! The headless render target: the same structure the DOM mount produces,
//! as text. Used by non-browser hosts and by the integration tests to
//! observe the exact rendered output.

use crate::widget::{Element, VisualNode, VisualStyle};
use std::fmt::Write;

/// Emit a visual tree as an indented HTML fragment.
#[must_use]
pub fn emit_html(node: &VisualNode) -> String {
    let mut out = String::with_capacity(256);
    emit_node(&mut out, node, 0);
    out
}

fn emit_node(out: &mut String, node: &VisualNode, depth: usize) {
    indent(out, depth);

    match &node.element {
        Element::TextInput { value } => {
            writeln!(out, "<textarea>{}</textarea>", escape_text(value)).unwrap();
        }
        Element::Container { class } => {
            write!(out, "<div class=\"widget {}\"", escape_attr(class)).unwrap();
            let style = style_decl(&node.style);
            if !style.is_empty() {
                write!(out, " style=\"{style}\"").unwrap();
            }
            out.push('>');

            if let Some(text) = &node.text {
                out.push_str(&escape_text(text));
            }

            if node.children.is_empty() {
                out.push_str("</div>\n");
            } else {
                out.push('\n');
                for child in &node.children {
                    emit_node(out, child, depth + 1);
                }
                indent(out, depth);
                out.push_str("</div>\n");
            }
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

/// Render the inline style declaration, declaration order fixed.
fn style_decl(style: &VisualStyle) -> String {
    let mut decl = String::new();
    push_px(&mut decl, "width", style.width);
    push_px(&mut decl, "height", style.height);
    push_px(&mut decl, "margin-top", style.margin_top);
    push_px(&mut decl, "margin-left", style.margin_left);
    push_px(&mut decl, "margin-bottom", style.margin_bottom);
    push_px(&mut decl, "margin-right", style.margin_right);
    if style.absolute {
        push_prop(&mut decl, "position", "absolute");
    }
    push_px(&mut decl, "left", style.left);
    push_px(&mut decl, "top", style.top);
    decl
}

fn push_px(decl: &mut String, prop: &str, value: Option<f64>) {
    if let Some(v) = value {
        let text = px(v);
        push_prop(decl, prop, &text);
    }
}

fn push_prop(decl: &mut String, prop: &str, value: &str) {
    if !decl.is_empty() {
        decl.push_str("; ");
    }
    write!(decl, "{prop}: {value}").unwrap();
}

/// Format a pixel length, dropping a trailing `.0`.
#[must_use]
pub fn px(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

/// Escape text content for HTML.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
