//! Recursive search over a block tree.
//!
//! All searches walk the tree depth-first in pre-order and recurse into
//! children unconditionally, so results come back parents before children.

use crate::block::BlockNode;

/// Trailing marker that turns a name pattern into a prefix match.
pub const WILDCARD: char = '*';

/// Whether a block name matches a name pattern.
///
/// A pattern ending in [`WILDCARD`] matches any name that starts with the
/// portion before the marker; every other pattern requires exact equality.
///
/// # Examples
///
/// ```
/// use blockflow_core::name_matches;
///
/// assert!(name_matches("core/heading", "core/heading"));
/// assert!(name_matches("core/heading", "core/*"));
/// assert!(!name_matches("core/heading", "core/head"));
/// ```
pub fn name_matches(name: &str, pattern: &str) -> bool {
    match pattern.strip_suffix(WILDCARD) {
        Some(prefix) => name.starts_with(prefix),
        None => name == pattern,
    }
}

/// Whether a node's name matches a pattern. Nameless nodes never match,
/// wildcard patterns included.
pub(crate) fn matches_pattern(node: &BlockNode, pattern: &str) -> bool {
    node.name
        .as_deref()
        .is_some_and(|name| name_matches(name, pattern))
}

/// Collects every node whose name matches `pattern`, in traversal order.
pub fn find_by_name<'a>(tree: &'a [BlockNode], pattern: &str) -> Vec<&'a BlockNode> {
    let mut found = Vec::new();
    collect(tree, &mut found, &mut |node| matches_pattern(node, pattern));
    found
}

/// Collects every node whose class list contains `class_name` as an exact
/// token, in traversal order.
pub fn find_by_class<'a>(tree: &'a [BlockNode], class_name: &str) -> Vec<&'a BlockNode> {
    let mut found = Vec::new();
    collect(tree, &mut found, &mut |node| node.has_class(class_name));
    found
}

fn collect<'a, F>(nodes: &'a [BlockNode], found: &mut Vec<&'a BlockNode>, matches: &mut F)
where
    F: FnMut(&BlockNode) -> bool,
{
    for node in nodes {
        if matches(node) {
            found.push(node);
        }
        collect(&node.children, found, matches);
    }
}
