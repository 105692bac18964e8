//! Usage statistics over a block tree.

use crate::block::BlockNode;
use serde::Serialize;
use std::collections::HashMap;

/// How often one block name occurs in a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockUsage {
    /// Namespaced block name.
    pub name: String,
    /// Occurrence count.
    pub count: usize,
}

/// Counts occurrences per distinct block name, depth-first.
///
/// Nameless nodes (and empty-string names) are skipped. Entries are ordered
/// by descending count; names with equal counts keep their first-seen
/// traversal order.
pub fn count_by_name(tree: &[BlockNode]) -> Vec<BlockUsage> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    tally(tree, &mut order, &mut counts);

    let mut usage: Vec<BlockUsage> = order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            BlockUsage { name, count }
        })
        .collect();
    // stable sort: ties keep first-seen order
    usage.sort_by(|a, b| b.count.cmp(&a.count));
    usage
}

fn tally(nodes: &[BlockNode], order: &mut Vec<String>, counts: &mut HashMap<String, usize>) {
    for node in nodes {
        if let Some(name) = node.name.as_deref()
            && !name.is_empty()
        {
            if !counts.contains_key(name) {
                order.push(name.to_string());
            }
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
        tally(&node.children, order, counts);
    }
}
