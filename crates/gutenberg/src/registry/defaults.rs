//! Default registry configuration for the stock core block types.
//!
//! Hosts normally hand over their own registry; this table covers the common
//! `core/*` types so examples and tests have something realistic to query.

use super::types::{BlockRegistry, BlockType};
use std::collections::HashMap;

/// Creates a registry covering the stock core block types.
///
/// The table includes:
/// - Static text and media types (paragraph, heading, list, quote, code, image, html)
/// - Layout containers (group, columns, column)
/// - Dynamic types rendered server-side: `core/latest-posts`, and `core/block`,
///   the reference to separately stored reusable content
///
/// # Example
///
/// ```
/// use blockflow_gutenberg::registry::defaults::default_core_registry;
///
/// let registry = default_core_registry();
/// assert!(registry.is_registered("core/paragraph"));
/// assert!(!registry.is_registered("acme/chart"));
/// ```
pub fn default_core_registry() -> BlockRegistry {
    BlockRegistry::from_types(vec![
        static_type("core/paragraph", "Paragraph", "text"),
        static_type("core/heading", "Heading", "text"),
        static_type("core/list", "List", "text"),
        static_type("core/quote", "Quote", "text"),
        static_type("core/code", "Code", "text"),
        static_type("core/image", "Image", "media"),
        html_type(),
        static_type("core/group", "Group", "design"),
        static_type("core/columns", "Columns", "design"),
        static_type("core/column", "Column", "design"),
        dynamic_type("core/latest-posts", "Latest Posts", "widgets"),
        dynamic_type("core/block", "Reusable Block", "reusable"),
    ])
}

/// Creates a static block type with the common support flags.
fn static_type(name: &str, title: &str, category: &str) -> BlockType {
    BlockType {
        name: name.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        is_dynamic: false,
        supports: base_supports(),
    }
}

/// Creates a server-rendered block type with the common support flags.
fn dynamic_type(name: &str, title: &str, category: &str) -> BlockType {
    BlockType {
        is_dynamic: true,
        ..static_type(name, title, category)
    }
}

/// The HTML block carries author-supplied markup; no classes are injected.
fn html_type() -> BlockType {
    BlockType {
        name: "core/html".to_string(),
        title: "Custom HTML".to_string(),
        category: "text".to_string(),
        is_dynamic: false,
        supports: HashMap::from([
            ("className".to_string(), false),
            ("customClassName".to_string(), false),
        ]),
    }
}

fn base_supports() -> HashMap<String, bool> {
    HashMap::from([
        ("anchor".to_string(), true),
        ("className".to_string(), true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_the_text_types() {
        let registry = default_core_registry();
        for name in ["core/paragraph", "core/heading", "core/list", "core/quote"] {
            let block_type = registry.get(name).unwrap();
            assert_eq!(block_type.category, "text");
            assert!(!block_type.is_dynamic);
        }
    }

    #[test]
    fn default_registry_dynamic_names() {
        let registry = default_core_registry();
        assert_eq!(
            registry.dynamic_block_names(),
            vec!["core/block", "core/latest-posts"]
        );
    }

    #[test]
    fn reusable_block_reference_is_dynamic() {
        let registry = default_core_registry();
        let reusable = registry.get("core/block").unwrap();
        assert!(reusable.is_dynamic);
        assert_eq!(reusable.category, "reusable");
    }

    #[test]
    fn html_block_does_not_support_classes() {
        let registry = default_core_registry();
        let html = registry.get("core/html").unwrap();
        assert!(!html.supports("className"));
        assert!(!html.supports("customClassName"));
    }

    #[test]
    fn static_types_support_anchor_and_class() {
        let registry = default_core_registry();
        let paragraph = registry.get("core/paragraph").unwrap();
        assert!(paragraph.supports("anchor"));
        assert!(paragraph.supports("className"));
    }
}
