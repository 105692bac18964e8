//! Attribute access and class-list helpers for [`BlockNode`].
//!
//! Lookups are default-valued: an absent attribute map and an absent key both
//! resolve to `None` rather than failing. Mutation is builder-style and
//! copy-on-write; the map is created on the first write.

use crate::block::BlockNode;
use serde_json::{Map, Value};

/// Attribute key holding the space-delimited class token list.
pub const CLASS_ATTRIBUTE: &str = "className";

impl BlockNode {
    /// Looks up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.as_ref().and_then(|map| map.get(key))
    }

    /// String view of an attribute; `None` when missing or not a string.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    /// Boolean view of an attribute; `None` when missing or not a boolean.
    pub fn attribute_bool(&self, key: &str) -> Option<bool> {
        self.attribute(key).and_then(Value::as_bool)
    }

    /// Integer view of an attribute; `None` when missing or not an integer.
    pub fn attribute_i64(&self, key: &str) -> Option<i64> {
        self.attribute(key).and_then(Value::as_i64)
    }

    /// Returns the record with `key` set to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockflow_core::BlockNode;
    ///
    /// let block = BlockNode::named("core/paragraph").with_attribute("className", "x y");
    /// assert_eq!(block.attribute_str("className"), Some("x y"));
    /// ```
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Returns the record without `key`. Removing from an absent map is a
    /// no-op; removing the last key drops the map.
    pub fn without_attribute(mut self, key: &str) -> Self {
        if let Some(map) = self.attributes.as_mut() {
            map.remove(key);
            if map.is_empty() {
                self.attributes = None;
            }
        }
        self
    }

    /// Class tokens from the `className` attribute, in order.
    pub fn class_names(&self) -> Vec<&str> {
        self.attribute_str(CLASS_ATTRIBUTE)
            .map(|value| value.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Exact token membership in the class list.
    pub fn has_class(&self, token: &str) -> bool {
        self.class_names().iter().any(|name| *name == token)
    }

    /// Returns the record with `token` present in its class list, appended
    /// after any existing tokens.
    pub fn with_class(self, token: &str) -> Self {
        if self.has_class(token) {
            return self;
        }
        let mut classes: Vec<String> = self.class_names().iter().map(|c| c.to_string()).collect();
        classes.push(token.to_string());
        let joined = classes.join(" ");
        self.with_attribute(CLASS_ATTRIBUTE, joined)
    }

    /// Returns the record with `token` removed from its class list. Removing
    /// the final token drops the `className` attribute entirely.
    pub fn without_class(self, token: &str) -> Self {
        if !self.has_class(token) {
            return self;
        }
        let remaining: Vec<String> = self
            .class_names()
            .into_iter()
            .filter(|c| *c != token)
            .map(str::to_string)
            .collect();
        if remaining.is_empty() {
            self.without_attribute(CLASS_ATTRIBUTE)
        } else {
            let joined = remaining.join(" ");
            self.with_attribute(CLASS_ATTRIBUTE, joined)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get_round_trips() {
        let block = BlockNode::named("core/paragraph").with_attribute("className", "x y");
        assert_eq!(block.attribute_str("className"), Some("x y"));
        assert!(block.has_class("x"));
        assert!(block.has_class("y"));
        assert!(!block.has_class("z"));
    }

    #[test]
    fn map_is_created_on_first_write() {
        let block = BlockNode::named("core/image");
        assert!(block.attributes.is_none());

        let block = block.with_attribute("id", 42);
        assert!(block.attributes.is_some());
        assert_eq!(block.attribute_i64("id"), Some(42));
    }

    #[test]
    fn absent_lookups_resolve_to_none() {
        let block = BlockNode::named("core/paragraph");
        assert_eq!(block.attribute("align"), None);
        assert!(block.class_names().is_empty());
        assert!(!block.has_class("anything"));
    }

    #[test]
    fn typed_accessors_reject_wrong_types() {
        let block = BlockNode::named("core/heading")
            .with_attribute("level", 2)
            .with_attribute("content", "Title")
            .with_attribute("isLink", true);
        assert_eq!(block.attribute_i64("level"), Some(2));
        assert_eq!(block.attribute_str("level"), None);
        assert_eq!(block.attribute_str("content"), Some("Title"));
        assert_eq!(block.attribute_bool("isLink"), Some(true));
        assert_eq!(block.attribute_bool("content"), None);
    }

    #[test]
    fn without_attribute_on_absent_map_is_noop() {
        let block = BlockNode::named("core/paragraph").without_attribute("align");
        assert!(block.attributes.is_none());
    }

    #[test]
    fn removing_last_attribute_drops_the_map() {
        let block = BlockNode::named("core/paragraph")
            .with_attribute("align", "wide")
            .without_attribute("align");
        assert!(block.attributes.is_none());
    }

    #[test]
    fn with_class_appends_and_dedupes() {
        let block = BlockNode::named("core/paragraph")
            .with_class("intro")
            .with_class("highlight")
            .with_class("intro");
        assert_eq!(block.attribute_str(CLASS_ATTRIBUTE), Some("intro highlight"));
    }

    #[test]
    fn without_class_keeps_remaining_token_order() {
        let block = BlockNode::named("core/paragraph")
            .with_attribute(CLASS_ATTRIBUTE, "a b c")
            .without_class("b");
        assert_eq!(block.attribute_str(CLASS_ATTRIBUTE), Some("a c"));
    }

    #[test]
    fn removing_final_class_drops_the_attribute() {
        let block = BlockNode::named("core/paragraph")
            .with_class("only")
            .without_class("only");
        assert_eq!(block.attribute(CLASS_ATTRIBUTE), None);
    }

    #[test]
    fn non_string_class_attribute_yields_no_tokens() {
        let block = BlockNode::named("core/paragraph").with_attribute(CLASS_ATTRIBUTE, json!(7));
        assert!(block.class_names().is_empty());
        assert!(!block.has_class("7"));
    }
}
