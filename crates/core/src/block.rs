//! Block record tree node.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One node of a parsed content tree.
///
/// Records are produced by the host platform's parser from a serialized text
/// blob and handed back to its serializer after any rewriting. Freeform runs
/// of markup (including the whitespace between real blocks) come through as
/// nodes without a `name`; name-based search never matches them.
///
/// # Examples
///
/// ```
/// use blockflow_core::BlockNode;
///
/// let tree = vec![
///     BlockNode::named("core/heading"),
///     BlockNode::named("core/group")
///         .with_children(vec![BlockNode::named("core/paragraph")]),
/// ];
/// assert!(tree[0].is_named());
/// assert_eq!(tree[1].children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockNode {
    /// Namespaced block identifier (e.g. `"core/paragraph"`); `None` for
    /// freeform nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Attribute map; an absent map is treated as empty everywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,
    /// Raw markup associated with this node, opaque to this crate.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub inner_content: String,
    /// Ordered child records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    /// Creates a named block with no attributes, content, or children.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Creates a freeform node carrying raw markup.
    pub fn freeform(inner_content: impl Into<String>) -> Self {
        Self {
            inner_content: inner_content.into(),
            ..Self::default()
        }
    }

    /// Borrowed view of the block name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether this record carries a name.
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    /// Returns the record with its raw markup replaced.
    pub fn with_inner_content(mut self, inner_content: impl Into<String>) -> Self {
        self.inner_content = inner_content.into();
        self
    }

    /// Returns the record with its children replaced.
    pub fn with_children(mut self, children: Vec<BlockNode>) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let block = BlockNode::named("core/heading").with_inner_content("<h2>Hi</h2>");
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"name":"core/heading","innerContent":"<h2>Hi</h2>"}"#);
    }

    #[test]
    fn skips_absent_fields_when_serializing() {
        let json = serde_json::to_string(&BlockNode::named("core/paragraph")).unwrap();
        assert_eq!(json, r#"{"name":"core/paragraph"}"#);
    }

    #[test]
    fn deserializes_missing_fields_to_defaults() {
        let block: BlockNode = serde_json::from_str("{}").unwrap();
        assert_eq!(block, BlockNode::default());
        assert!(!block.is_named());
        assert!(block.children.is_empty());
    }

    #[test]
    fn deserializes_nested_children() {
        let json = r#"{"name":"core/group","children":[{"name":"core/paragraph"}]}"#;
        let block: BlockNode = serde_json::from_str(json).unwrap();
        assert_eq!(block.name(), Some("core/group"));
        assert_eq!(block.children[0].name(), Some("core/paragraph"));
    }

    #[test]
    fn freeform_nodes_have_no_name() {
        let node = BlockNode::freeform("\n\n");
        assert!(!node.is_named());
        assert_eq!(node.inner_content, "\n\n");
    }
}
