pub mod build;
pub mod html;
pub mod widget;

pub use build::{build_preview, build_widget};
pub use html::emit_html;
pub use widget::{Element, VisualNode, VisualStyle};
