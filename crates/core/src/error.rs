use thiserror::Error;

/// Errors surfaced while driving the host platform's block pipeline.
///
/// Tree traversal and attribute helpers never fail; every variant here
/// originates at a collaborator seam and carries the collaborator's own
/// message through unmodified.
#[derive(Debug, Error)]
pub enum BlockflowError {
    /// The platform parser rejected the raw content.
    #[error("Parse error: {message}")]
    Parse {
        /// Collaborator-reported message
        message: String,
    },
    /// The platform serializer could not write the tree back out.
    #[error("Serialize error: {message}")]
    Serialize {
        /// Collaborator-reported message
        message: String,
    },
    /// The platform renderer failed on a record.
    #[error("Render error: {message}")]
    Render {
        /// Collaborator-reported message
        message: String,
    },
    /// A block name with no entry in the block-type registry.
    #[error("Unknown block type: {name}")]
    UnknownBlockType {
        /// Namespaced name that missed
        name: String,
    },
    /// Internal logic error (unexpected state).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlockflowError {
    /// Wrap a parser failure
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Wrap a serializer failure
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }

    /// Wrap a renderer failure
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Flag a name missing from the registry
    pub fn unknown_block_type(name: impl Into<String>) -> Self {
        Self::UnknownBlockType { name: name.into() }
    }
}
