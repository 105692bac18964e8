//! Parsing and serialization seams for the host pipeline.
//!
//! The host platform owns the real parser and serializer; this crate only
//! calls through these traits. Closures implement both, so tests and simple
//! hosts can plug in without a wrapper type.

use crate::block::BlockNode;
use crate::error::BlockflowError;

/// Converts a serialized text blob into a tree of block records.
pub trait BlockParser {
    /// Parses `raw` into top-level block records.
    fn parse(&self, raw: &str) -> Result<Vec<BlockNode>, BlockflowError>;
}

impl<F> BlockParser for F
where
    F: Fn(&str) -> Result<Vec<BlockNode>, BlockflowError>,
{
    fn parse(&self, raw: &str) -> Result<Vec<BlockNode>, BlockflowError> {
        (self)(raw)
    }
}

/// Inverse of [`BlockParser`].
///
/// Implementations must round-trip semantically with their parser for any
/// tree produced solely through this crate's filter and rewrite operations.
pub trait BlockSerializer {
    /// Serializes a block tree back into a text blob.
    fn serialize(&self, tree: &[BlockNode]) -> Result<String, BlockflowError>;
}

impl<F> BlockSerializer for F
where
    F: Fn(&[BlockNode]) -> Result<String, BlockflowError>,
{
    fn serialize(&self, tree: &[BlockNode]) -> Result<String, BlockflowError> {
        (self)(tree)
    }
}
