//! Tree rewriting: filtering nodes out and bulk replacement.
//!
//! Both operations build a new tree and leave the input untouched; sibling
//! order is preserved throughout.

use crate::block::BlockNode;
use crate::search::matches_pattern;

/// Produces a new tree without any node whose name matches `pattern`.
///
/// An excluded node takes its entire subtree with it; children of an excluded
/// node are not promoted to its level. Retained nodes get their children
/// filtered recursively.
pub fn filter_out(tree: &[BlockNode], pattern: &str) -> Vec<BlockNode> {
    tree.iter()
        .filter(|node| !matches_pattern(node, pattern))
        .map(|node| {
            let mut kept = node.clone();
            kept.children = filter_out(&node.children, pattern);
            kept
        })
        .collect()
}

/// Rebuilds a tree, passing every node whose name matches `pattern` through
/// `replace` and keeping the rest as-is.
///
/// The replacement happens before descending, so children kept by the
/// replacement record are themselves rewritten afterwards.
pub fn replace_by_name<F>(tree: &[BlockNode], pattern: &str, replace: &F) -> Vec<BlockNode>
where
    F: Fn(&BlockNode) -> BlockNode,
{
    tree.iter()
        .map(|node| {
            let mut next = if matches_pattern(node, pattern) {
                replace(node)
            } else {
                node.clone()
            };
            let children = replace_by_name(&next.children, pattern, replace);
            next.children = children;
            next
        })
        .collect()
}
