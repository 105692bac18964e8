//! Registry type definitions and queries.

use blockflow_core::{BlockNode, BlockflowError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block-type definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockType {
    /// Namespaced block name (e.g. `"core/paragraph"`).
    pub name: String,
    /// Human-readable title shown in the editor.
    pub title: String,
    /// Editor category (e.g. `"text"`, `"media"`).
    pub category: String,
    /// Whether the block's markup is produced server-side at render time.
    #[serde(default)]
    pub is_dynamic: bool,
    /// Feature support flags (e.g. `"anchor"`, `"className"`).
    #[serde(default)]
    pub supports: HashMap<String, bool>,
}

impl BlockType {
    /// Whether a support flag is enabled. Unlisted flags count as disabled.
    pub fn supports(&self, flag: &str) -> bool {
        self.supports.get(flag).copied().unwrap_or(false)
    }
}

/// Static lookup table of registered block types.
///
/// Owned and populated by the host platform; this crate only queries it.
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    types: HashMap<String, BlockType>,
}

impl BlockRegistry {
    /// Builds a registry from a list of block types. A name registered twice
    /// keeps the later entry.
    pub fn from_types(types: Vec<BlockType>) -> Self {
        Self {
            types: types
                .into_iter()
                .map(|block_type| (block_type.name.clone(), block_type))
                .collect(),
        }
    }

    /// Whether `name` has a registered type.
    pub fn is_registered(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Looks up one block type.
    pub fn get(&self, name: &str) -> Option<&BlockType> {
        self.types.get(name)
    }

    /// Looks up one block type, failing when it is not registered.
    pub fn require(&self, name: &str) -> Result<&BlockType, BlockflowError> {
        self.get(name)
            .ok_or_else(|| BlockflowError::unknown_block_type(name))
    }

    /// All registered types, keyed by name.
    pub fn all(&self) -> &HashMap<String, BlockType> {
        &self.types
    }

    /// Names of the dynamic block types, sorted.
    pub fn dynamic_block_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .types
            .values()
            .filter(|block_type| block_type.is_dynamic)
            .map(|block_type| block_type.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Distinct block names used in `tree` that have no registry entry, in
    /// first-seen traversal order.
    pub fn unregistered_names(&self, tree: &[BlockNode]) -> Vec<String> {
        let mut missing = Vec::new();
        self.collect_unregistered(tree, &mut missing);
        missing
    }

    fn collect_unregistered(&self, nodes: &[BlockNode], missing: &mut Vec<String>) {
        for node in nodes {
            if let Some(name) = node.name()
                && !self.is_registered(name)
                && !missing.iter().any(|seen| seen == name)
            {
                missing.push(name.to_string());
            }
            self.collect_unregistered(&node.children, missing);
        }
    }
}
