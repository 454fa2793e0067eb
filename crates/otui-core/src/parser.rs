//! Indentation/markup parser: raw source text → attribute tree.
//!
//! The format is line-oriented and whitespace-significant. A line whose
//! trimmed content carries no `:` declares a widget and opens a scope;
//! any other non-blank line assigns a property to the innermost open
//! scope. Scope depth is tracked with an explicit indentation stack: a
//! declaration closes every open scope whose indent is greater than or
//! equal to its own before opening a new one.
//!
//! Parsing is total: malformed input degrades to a best-effort tree, it
//! never fails. A declaration name containing a colon would classify as a
//! property; that is an accepted constraint of the format.

use crate::model::Node;
use crate::value::Value;
use smallvec::SmallVec;

/// One open scope: the declaration's indent column and its node under
/// construction. The node attaches to its parent when the scope closes.
struct Frame {
    indent: isize,
    name: String,
    node: Node,
}

/// Documents are shallow in practice; eight frames cover typical nesting
/// without touching the heap.
type Stack = SmallVec<[Frame; 8]>;

/// Parse a source document into its root node.
///
/// The root's child map holds every top-level declaration (the builder
/// renders only the first); top-level property lines land in the root's
/// own attribute map. Blank lines are ignored entirely and do not affect
/// indentation tracking.
#[must_use]
pub fn parse_document(input: &str) -> Node {
    let mut stack = Stack::new();
    stack.push(Frame {
        indent: -1,
        name: String::new(),
        node: Node::new(),
    });

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Indent is the raw character column of the first non-whitespace
        // character; tabs count as one column, not a tab stop.
        let indent = line.chars().take_while(|c| c.is_whitespace()).count() as isize;

        if !trimmed.contains(':') {
            while stack.len() > 1 && stack.last().is_some_and(|top| indent <= top.indent) {
                close_top(&mut stack);
            }
            log::trace!("open scope {trimmed:?} at column {indent}");
            stack.push(Frame {
                indent,
                name: trimmed.to_string(),
                node: Node::new(),
            });
            continue;
        }

        // Property: split at the first `:` only; values may themselves
        // contain colons (URLs, time strings).
        let Some((key, raw)) = trimmed.split_once(':') else {
            continue;
        };
        if let Some(top) = stack.last_mut() {
            top.node
                .attrs
                .insert(key.trim().to_string(), Value::coerce(raw.trim()));
        }
    }

    while stack.len() > 1 {
        close_top(&mut stack);
    }
    stack.pop().map(|frame| frame.node).unwrap_or_default()
}

/// Close the innermost scope, attaching its node to the surviving top.
fn close_top(stack: &mut Stack) {
    if let Some(closed) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.node.insert_child(closed.name, closed.node);
        }
    }
}
