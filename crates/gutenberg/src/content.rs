//! Raw-content convenience operations.
//!
//! Every helper takes the serialized content and the collaborator seams as
//! explicit arguments; nothing reads ambient state. Parser and serializer
//! failures pass through unmodified.

use blockflow_core::{
    BlockNode, BlockParser, BlockSerializer, BlockUsage, BlockflowError, count_by_name, filter_out,
    find_by_name, replace_by_name,
};

/// Whether `raw` contains at least one block matching `pattern`.
pub fn has_block(
    parser: &impl BlockParser,
    raw: &str,
    pattern: &str,
) -> Result<bool, BlockflowError> {
    let tree = parser.parse(raw)?;
    Ok(!find_by_name(&tree, pattern).is_empty())
}

/// Per-name usage counts for the blocks in `raw`.
pub fn usage(parser: &impl BlockParser, raw: &str) -> Result<Vec<BlockUsage>, BlockflowError> {
    Ok(count_by_name(&parser.parse(raw)?))
}

/// Removes every block matching `pattern` (subtrees included) and serializes
/// the remainder. Content without a match comes back verbatim, unserialized.
pub fn remove_blocks(
    parser: &impl BlockParser,
    serializer: &impl BlockSerializer,
    raw: &str,
    pattern: &str,
) -> Result<String, BlockflowError> {
    let tree = parser.parse(raw)?;
    let matched = find_by_name(&tree, pattern).len();
    if matched == 0 {
        return Ok(raw.to_string());
    }
    log::debug!("removing {} blocks matching {}", matched, pattern);
    serializer.serialize(&filter_out(&tree, pattern))
}

/// Rewrites every block matching `pattern` through `replace` and serializes
/// the result.
pub fn replace_blocks(
    parser: &impl BlockParser,
    serializer: &impl BlockSerializer,
    raw: &str,
    pattern: &str,
    replace: impl Fn(&BlockNode) -> BlockNode,
) -> Result<String, BlockflowError> {
    let tree = parser.parse(raw)?;
    serializer.serialize(&replace_by_name(&tree, pattern, &replace))
}
