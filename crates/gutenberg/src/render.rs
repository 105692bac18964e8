//! Rendering seam and whole-tree rendering.

use blockflow_core::{BlockNode, BlockflowError};

/// Produces the final markup for one block record.
///
/// The host platform implements this; dynamic server-side content and child
/// handling are the implementor's concern. Closures implement the trait
/// directly, same as the parsing seams.
pub trait BlockRenderer {
    /// Renders one record, children included.
    fn render(&self, block: &BlockNode) -> Result<String, BlockflowError>;
}

impl<F> BlockRenderer for F
where
    F: Fn(&BlockNode) -> Result<String, BlockflowError>,
{
    fn render(&self, block: &BlockNode) -> Result<String, BlockflowError> {
        (self)(block)
    }
}

/// Renders every top-level record in order and concatenates the markup.
///
/// Renderer failures are passed through unmodified.
pub fn render_tree(
    tree: &[BlockNode],
    renderer: &impl BlockRenderer,
) -> Result<String, BlockflowError> {
    let mut output = String::new();
    for block in tree {
        output.push_str(&renderer.render(block)?);
    }
    Ok(output)
}
