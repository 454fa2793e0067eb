//! Attribute-tree data model.
//!
//! A parsed document is a tree of `Node`s. Each declaration collects an
//! insertion-ordered attribute map (property lines) and a separate
//! insertion-ordered child map (nested declarations). Repeating a
//! declaration name under the same parent promotes its entry from
//! `Single` to an ordered `Many`. Properties never promote: a repeated
//! key overwrites.

use crate::value::Value;
use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

// ─── Widget kinds ────────────────────────────────────────────────────────

/// The closed set of declaration names the builder recurses into.
///
/// Any other declaration name still parses and still builds a generic
/// container, but is never descended into when nested under another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    MainWindow,
    Label,
    Button,
    TextEdit,
    Panel,
    MiniWindow,
    UICreature,
    UIItem,
}

impl WidgetKind {
    /// Match a declaration name against the recognized set. Case-sensitive.
    pub fn from_name(name: &str) -> Option<WidgetKind> {
        match name {
            "MainWindow" => Some(WidgetKind::MainWindow),
            "Label" => Some(WidgetKind::Label),
            "Button" => Some(WidgetKind::Button),
            "TextEdit" => Some(WidgetKind::TextEdit),
            "Panel" => Some(WidgetKind::Panel),
            "MiniWindow" => Some(WidgetKind::MiniWindow),
            "UICreature" => Some(WidgetKind::UICreature),
            "UIItem" => Some(WidgetKind::UIItem),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::MainWindow => "MainWindow",
            WidgetKind::Label => "Label",
            WidgetKind::Button => "Button",
            WidgetKind::TextEdit => "TextEdit",
            WidgetKind::Panel => "Panel",
            WidgetKind::MiniWindow => "MiniWindow",
            WidgetKind::UICreature => "UICreature",
            WidgetKind::UIItem => "UIItem",
        }
    }
}

// ─── Nodes ───────────────────────────────────────────────────────────────

/// One declaration's collected content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    /// Property lines, in source order. Last write wins per key.
    pub attrs: IndexMap<String, Value>,

    /// Nested declarations keyed by declaration name, in first-seen order.
    pub children: IndexMap<String, ChildEntry>,
}

/// A child slot: one node, or the ordered run of same-named siblings.
///
/// A lone declaration stays `Single`; it is never wrapped in a one-element
/// `Many`. The second same-named sibling performs the promotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChildEntry {
    Single(Node),
    Many(Vec<Node>),
}

impl Node {
    pub fn new() -> Node {
        Node::default()
    }

    /// Look up a property value.
    pub fn attr(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    /// Attach a closed child declaration under `name`, applying the
    /// duplicate-declaration promotion rule.
    pub fn insert_child(&mut self, name: String, child: Node) {
        match self.children.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(ChildEntry::Single(child));
            }
            Entry::Occupied(slot) => {
                let entry = slot.into_mut();
                *entry = match std::mem::replace(entry, ChildEntry::Many(Vec::new())) {
                    ChildEntry::Single(first) => ChildEntry::Many(vec![first, child]),
                    ChildEntry::Many(mut nodes) => {
                        nodes.push(child);
                        ChildEntry::Many(nodes)
                    }
                };
            }
        }
    }
}

/// A `Node` serializes as one flat JSON object, attributes first, then
/// child declarations, so downstream consumers see the shape
/// `{ "id": "main", "size": [300, 100], "Label": { ... } }`.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attrs.len() + self.children.len()))?;
        for (key, value) in &self.attrs {
            map.serialize_entry(key, value)?;
        }
        for (name, entry) in &self.children {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_name_roundtrip() {
        for kind in [
            WidgetKind::MainWindow,
            WidgetKind::Label,
            WidgetKind::Button,
            WidgetKind::TextEdit,
            WidgetKind::Panel,
            WidgetKind::MiniWindow,
            WidgetKind::UICreature,
            WidgetKind::UIItem,
        ] {
            assert_eq!(WidgetKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(WidgetKind::from_name("Widget"), None);
        // Case-sensitive: lowercase forms are not recognized.
        assert_eq!(WidgetKind::from_name("label"), None);
    }

    #[test]
    fn single_declaration_stays_single() {
        let mut parent = Node::new();
        parent.insert_child("Label".into(), Node::new());
        assert!(matches!(
            parent.children.get("Label"),
            Some(ChildEntry::Single(_))
        ));
    }

    #[test]
    fn duplicate_declaration_promotes_to_many() {
        let mut parent = Node::new();
        let mut first = Node::new();
        first.attrs.insert("id".into(), Value::String("a".into()));
        let mut second = Node::new();
        second.attrs.insert("id".into(), Value::String("b".into()));
        let mut third = Node::new();
        third.attrs.insert("id".into(), Value::String("c".into()));

        parent.insert_child("Label".into(), first);
        parent.insert_child("Label".into(), second);
        parent.insert_child("Label".into(), third);

        match parent.children.get("Label") {
            Some(ChildEntry::Many(nodes)) => {
                let ids: Vec<_> = nodes
                    .iter()
                    .map(|n| n.attr("id").unwrap().to_string())
                    .collect();
                assert_eq!(ids, vec!["a", "b", "c"]);
            }
            other => panic!("expected Many, got {other:?}"),
        }
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut label = Node::new();
        label.attrs.insert("text".into(), Value::String("Hi".into()));
        let mut root = Node::new();
        root.attrs.insert("id".into(), Value::String("main".into()));
        root.insert_child("Label".into(), label);

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "main", "Label": { "text": "Hi" } })
        );
    }
}
