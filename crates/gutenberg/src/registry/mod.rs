//! Block-type registry: the host platform's static lookup table.
//!
//! - `types`: `BlockType` records and the queried-only `BlockRegistry`.
//! - `defaults`: stock `core/*` table for examples and tests.

/// Default registry configuration for the stock core block types.
pub mod defaults;
/// Registry type definitions and queries.
pub mod types;

pub use types::{BlockRegistry, BlockType};
