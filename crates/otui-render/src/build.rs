//! Attribute tree → visual widget hierarchy.
//!
//! Walks one declaration node and materializes its visual tree: geometry
//! from `size`, the four `margin-*` offsets, the item-widget absolute
//! rule, per-kind content rules, then recursion into every child entry
//! whose declaration name is a recognized widget kind.

use crate::widget::VisualNode;
use otui_core::{ChildEntry, Node, Value, WidgetKind};

/// Build the preview root from a parsed document.
///
/// Only the first top-level declaration renders; later top-level siblings
/// stay in the tree unrendered. An empty child map is the single
/// structural failure, surfaced at the orchestrator boundary.
pub fn build_preview(root: &Node) -> Result<VisualNode, String> {
    let no_root = || "invalid parsed structure: no top-level widget declaration".to_string();

    let (name, entry) = root.children.first().ok_or_else(no_root)?;
    let node = match entry {
        ChildEntry::Single(node) => node,
        // A duplicated top-level name renders its first occurrence.
        ChildEntry::Many(nodes) => nodes.first().ok_or_else(no_root)?,
    };
    Ok(build_widget(name, node))
}

/// Build one widget node, recursively. Never fails: a malformed
/// attribute tree yields a malformed or incomplete visual tree.
pub fn build_widget(kind_name: &str, node: &Node) -> VisualNode {
    let kind = WidgetKind::from_name(kind_name);
    let mut visual = VisualNode::container(kind_name);

    if let Some(Value::List(items)) = node.attr("size") {
        if let [w, h] = items.as_slice() {
            visual.style.width = w.as_f64();
            visual.style.height = h.as_f64();
        }
    }

    visual.style.margin_top = margin(node, "margin-top");
    visual.style.margin_left = margin(node, "margin-left");
    visual.style.margin_bottom = margin(node, "margin-bottom");
    visual.style.margin_right = margin(node, "margin-right");

    // Item widgets position absolutely, mirroring their margins into
    // left/top offsets.
    if kind == Some(WidgetKind::UIItem) {
        visual.style.absolute = true;
        visual.style.left = visual.style.margin_left;
        visual.style.top = visual.style.margin_top;
    }

    match kind {
        Some(WidgetKind::Label | WidgetKind::Button) => {
            visual.text = Some(text_or(node, "(empty)"));
        }
        Some(WidgetKind::TextEdit) => {
            // The editable primitive is the node's sole structural child;
            // the outer node carries no visible text of its own.
            visual.children.push(VisualNode::text_input(text_or(node, "")));
        }
        // Window, panel, and display kinds are plain containers, as is
        // any unrecognized declaration name.
        Some(
            WidgetKind::MainWindow
            | WidgetKind::Panel
            | WidgetKind::MiniWindow
            | WidgetKind::UICreature
            | WidgetKind::UIItem,
        )
        | None => {}
    }

    for (child_name, entry) in &node.children {
        if WidgetKind::from_name(child_name).is_none() {
            continue;
        }
        log::trace!("BUILD {child_name} under {kind_name}");
        match entry {
            ChildEntry::Single(child) => {
                visual.children.push(build_widget(child_name, child));
            }
            ChildEntry::Many(children) => {
                for child in children {
                    visual.children.push(build_widget(child_name, child));
                }
            }
        }
    }

    visual
}

/// A margin attribute counts only when truthy (zero and the empty string
/// read as absent) and only when it also reads as a number.
fn margin(node: &Node, key: &str) -> Option<f64> {
    node.attr(key)
        .filter(|value| value.is_truthy())
        .and_then(Value::as_f64)
}

fn text_or(node: &Node, fallback: &str) -> String {
    match node.attr("text") {
        Some(value) if value.is_truthy() => value.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Element;
    use otui_core::parse_document;
    use pretty_assertions::assert_eq;

    fn build_first(input: &str) -> VisualNode {
        build_preview(&parse_document(input)).expect("preview should build")
    }

    #[test]
    fn size_sets_explicit_geometry() {
        let visual = build_first("Panel\n  size: [300, 100]\n");
        assert_eq!(visual.style.width, Some(300.0));
        assert_eq!(visual.style.height, Some(100.0));
    }

    #[test]
    fn size_requires_two_elements() {
        let visual = build_first("Panel\n  size: [300]\n");
        assert_eq!(visual.style.width, None);
        assert_eq!(visual.style.height, None);
    }

    #[test]
    fn malformed_size_sets_nothing() {
        // `[300, 100` coerces to an empty list at parse time.
        let visual = build_first("Panel\n  size: [300, 100\n");
        assert_eq!(visual.style.width, None);
        assert_eq!(visual.style.height, None);
    }

    #[test]
    fn zero_margin_reads_as_absent() {
        let visual = build_first("Panel\n  margin-top: 0\n  margin-left: 5\n");
        assert_eq!(visual.style.margin_top, None);
        assert_eq!(visual.style.margin_left, Some(5.0));
    }

    #[test]
    fn quoted_numeric_margin_still_applies() {
        let visual = build_first("Panel\n  margin-top: \"12\"\n");
        assert_eq!(visual.style.margin_top, Some(12.0));
    }

    #[test]
    fn item_widget_positions_absolutely() {
        let visual = build_first("UIItem\n  margin-top: 10\n  margin-left: 20\n");
        assert!(visual.style.absolute);
        assert_eq!(visual.style.top, Some(10.0));
        assert_eq!(visual.style.left, Some(20.0));
        // The margins themselves stay set as well.
        assert_eq!(visual.style.margin_top, Some(10.0));
        assert_eq!(visual.style.margin_left, Some(20.0));
    }

    #[test]
    fn non_item_widget_stays_in_flow() {
        let visual = build_first("Panel\n  margin-top: 10\n");
        assert!(!visual.style.absolute);
        assert_eq!(visual.style.top, None);
    }

    #[test]
    fn label_and_button_take_text_content() {
        let label = build_first("Label\n  text: \"Hello\"\n");
        assert_eq!(label.text.as_deref(), Some("Hello"));

        let button = build_first("Button\n");
        assert_eq!(button.text.as_deref(), Some("(empty)"));
    }

    #[test]
    fn falsy_text_falls_back_to_placeholder() {
        let label = build_first("Label\n  text: 0\n");
        assert_eq!(label.text.as_deref(), Some("(empty)"));
        let label = build_first("Label\n  text: \"\"\n");
        assert_eq!(label.text.as_deref(), Some("(empty)"));
    }

    #[test]
    fn text_edit_nests_an_input_primitive() {
        let visual = build_first("TextEdit\n  text: \"type here\"\n");
        assert_eq!(visual.text, None);
        assert_eq!(visual.children.len(), 1);
        assert_eq!(
            visual.children[0].element,
            Element::TextInput {
                value: "type here".into()
            }
        );
    }

    #[test]
    fn text_edit_without_text_gets_empty_value() {
        let visual = build_first("TextEdit\n");
        assert_eq!(
            visual.children[0].element,
            Element::TextInput {
                value: String::new()
            }
        );
    }

    #[test]
    fn recursion_covers_recognized_kinds_only() {
        let input = "\
MainWindow
  Label
    text: \"shown\"
  Sidebar
    text: \"never built\"
";
        let visual = build_first(input);
        assert_eq!(visual.children.len(), 1);
        assert_eq!(visual.children[0].class(), Some("Label"));
    }

    #[test]
    fn repeated_declarations_build_in_source_order() {
        let input = "\
Panel
  Label
    text: \"one\"
  Label
    text: \"two\"
  Button
    text: \"ok\"
";
        let visual = build_first(input);
        let texts: Vec<_> = visual
            .children
            .iter()
            .map(|c| c.text.as_deref().unwrap())
            .collect();
        assert_eq!(texts, vec!["one", "two", "ok"]);
    }

    #[test]
    fn nested_windows_recurse() {
        let input = "\
MainWindow
  MiniWindow
    MainWindow
      id: \"inner\"
";
        let visual = build_first(input);
        let mini = &visual.children[0];
        assert_eq!(mini.class(), Some("MiniWindow"));
        assert_eq!(mini.children[0].class(), Some("MainWindow"));
    }

    #[test]
    fn unrecognized_root_builds_a_generic_container() {
        let visual = build_first("Sidebar\n  size: [40, 200]\n");
        assert_eq!(visual.class(), Some("Sidebar"));
        assert_eq!(visual.style.width, Some(40.0));
        assert_eq!(visual.text, None);
        assert!(visual.children.is_empty());
    }

    #[test]
    fn empty_document_is_a_structural_failure() {
        let root = parse_document("");
        let err = build_preview(&root).unwrap_err();
        assert!(err.contains("invalid parsed structure"), "got: {err}");
    }

    #[test]
    fn only_first_top_level_declaration_renders() {
        let input = "MainWindow\n  id: \"one\"\nMiniWindow\n  id: \"two\"\n";
        let visual = build_first(input);
        assert_eq!(visual.class(), Some("MainWindow"));
        assert!(visual.children.is_empty());
    }

    #[test]
    fn duplicated_top_level_name_renders_first_occurrence() {
        let input = "MainWindow\n  size: [10, 10]\nMainWindow\n  size: [99, 99]\n";
        let visual = build_first(input);
        assert_eq!(visual.style.width, Some(10.0));
    }
}
