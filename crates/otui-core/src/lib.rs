pub mod model;
pub mod parser;
pub mod value;

pub use model::{ChildEntry, Node, WidgetKind};
pub use parser::parse_document;
pub use value::Value;
