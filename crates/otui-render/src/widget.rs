//! The abstract visual tree produced by the widget builder.
//!
//! A `VisualNode` is one mounted structural unit: a class-tagged container
//! (or the text-input primitive), its inline pixel styling, optional
//! visible text, and its children in declaration order. Concrete surfaces
//! (the DOM mount, the HTML emitter) render it without further
//! interpretation.

/// What a visual node mounts as.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A generic container tagged with its widget-kind class.
    Container { class: String },
    /// The editable text-input primitive nested inside a `TextEdit`.
    TextInput { value: String },
}

/// Inline styling, in pixel units. `None` means "not set".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualStyle {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_left: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_right: Option<f64>,
    /// Set by the item-widget rule; `left`/`top` mirror the margins then.
    pub absolute: bool,
    pub left: Option<f64>,
    pub top: Option<f64>,
}

/// One rendered structural unit.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualNode {
    pub element: Element,
    pub style: VisualStyle,
    /// Visible text content (label and button kinds).
    pub text: Option<String>,
    /// Children in declaration order.
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    pub fn container(class: &str) -> VisualNode {
        VisualNode {
            element: Element::Container {
                class: class.to_string(),
            },
            style: VisualStyle::default(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn text_input(value: String) -> VisualNode {
        VisualNode {
            element: Element::TextInput { value },
            style: VisualStyle::default(),
            text: None,
            children: Vec::new(),
        }
    }

    /// The widget-kind class, or `None` for the text-input primitive.
    pub fn class(&self) -> Option<&str> {
        match &self.element {
            Element::Container { class } => Some(class),
            Element::TextInput { .. } => None,
        }
    }
}
