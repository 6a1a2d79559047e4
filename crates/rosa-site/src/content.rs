//! Content tree nodes.
//!
//! The host CMS hands over its page hierarchy as nested JSON documents.
//! [`ContentNode`] mirrors that shape: an optional `type` tag, an optional
//! `children` array that may contain `null` holes, and any number of extra
//! attributes that are carried through untouched.
//!
//! [`NavigationNode`] is the projected counterpart produced by
//! [`NavigationProjector`](crate::NavigationProjector). Its child list is
//! always dense.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node of the source content tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    /// Role tag of the node (e.g. `containerDirectory`, `page`).
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub node_type: Option<String>,
    /// Ordered children. `None` entries are holes left by earlier edits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Option<ContentNode>>>,
    /// Remaining attributes (titles, URLs, pictures, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ContentNode {
    /// Create an untyped node with no children and no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node tagged with the given type.
    #[must_use]
    pub fn typed(node_type: impl Into<String>) -> Self {
        Self {
            node_type: Some(node_type.into()),
            ..Self::default()
        }
    }

    /// Set the children, wrapping every entry as present.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = ContentNode>) -> Self {
        self.children = Some(children.into_iter().map(Some).collect());
        self
    }

    /// Set the children verbatim, holes included.
    #[must_use]
    pub fn with_sparse_children(mut self, children: Vec<Option<ContentNode>>) -> Self {
        self.children = Some(children);
        self
    }

    /// Add or replace a pass-through attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl From<NavigationNode> for ContentNode {
    fn from(node: NavigationNode) -> Self {
        Self {
            node_type: node.node_type,
            children: node
                .children
                .map(|children| children.into_iter().map(|c| Some(c.into())).collect()),
            attributes: node.attributes,
        }
    }
}

/// Node of a projected navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationNode {
    /// Role tag, either the container marker or absent.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub node_type: Option<String>,
    /// Retained children in source order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NavigationNode>>,
    /// Attributes copied from the source node.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NavigationNode {
    /// Children as a slice; empty when the node has no child list.
    #[must_use]
    pub fn child_nodes(&self) -> &[NavigationNode] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.child_nodes().iter().map(Self::count).sum::<usize>()
    }

    /// Number of levels in this subtree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .child_nodes()
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
    }

    /// String attribute lookup.
    #[must_use]
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_holes_and_attributes() {
        let node: ContentNode = serde_json::from_value(json!({
            "type": "containerDirectory",
            "title": "Menu",
            "children": [null, {"type": "page", "url": "/menu/lunch"}]
        }))
        .unwrap();

        assert_eq!(node.node_type.as_deref(), Some("containerDirectory"));
        assert_eq!(node.attributes["title"], "Menu");
        let children = node.children.unwrap();
        assert_eq!(children.len(), 2);
        assert!(children[0].is_none());
        assert_eq!(
            children[1].as_ref().unwrap().attributes["url"],
            "/menu/lunch"
        );
    }

    #[test]
    fn test_null_type_is_untyped() {
        let node: ContentNode = serde_json::from_value(json!({"type": null})).unwrap();

        assert!(node.node_type.is_none());
        assert!(node.children.is_none());
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let node = ContentNode::new().with_attribute("title", "Home");

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json, json!({"title": "Home"}));
    }

    #[test]
    fn test_serialize_keeps_empty_children() {
        let node = NavigationNode {
            node_type: Some("containerDirectory".to_owned()),
            children: Some(Vec::new()),
            attributes: Map::new(),
        };

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json, json!({"type": "containerDirectory", "children": []}));
    }

    #[test]
    fn test_count_and_depth() {
        let leaf = NavigationNode::default();
        let node = NavigationNode {
            children: Some(vec![
                leaf.clone(),
                NavigationNode {
                    children: Some(vec![leaf.clone()]),
                    ..NavigationNode::default()
                },
            ]),
            ..NavigationNode::default()
        };

        assert_eq!(leaf.count(), 1);
        assert_eq!(leaf.depth(), 1);
        assert_eq!(node.count(), 4);
        assert_eq!(node.depth(), 3);
    }

    #[test]
    fn test_navigation_node_converts_back_to_content_node() {
        let nav = NavigationNode {
            node_type: Some("containerDirectory".to_owned()),
            children: Some(vec![NavigationNode::default()]),
            attributes: Map::from_iter([("title".to_owned(), json!("Rooms"))]),
        };

        let content = ContentNode::from(nav);

        assert_eq!(
            content,
            ContentNode::typed("containerDirectory")
                .with_children([ContentNode::new()])
                .with_attribute("title", "Rooms")
        );
    }

    #[test]
    fn test_attribute_str() {
        let nav: NavigationNode =
            serde_json::from_value(json!({"title": "Rooms", "order": 3})).unwrap();

        assert_eq!(nav.attribute_str("title"), Some("Rooms"));
        assert_eq!(nav.attribute_str("order"), None);
        assert_eq!(nav.attribute_str("missing"), None);
    }
}
