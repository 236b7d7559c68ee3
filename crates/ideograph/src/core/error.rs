//! Core error types for the mind-map engine
//!
//! Every mutation either succeeds or is rejected deterministically; no
//! error here is ever fatal to the process. Callers treat rejections as
//! no-ops and surface them at the originating user action.

use thiserror::Error;

use super::types::NodeId;

/// Errors produced by the engine's operations
#[derive(Error, Debug)]
pub enum MapError {
    #[error("empty label: node text must contain a non-whitespace character")]
    EmptyLabel,

    #[error("node {id} is the root and cannot be removed")]
    RootImmutable { id: NodeId },

    #[error("node {id} does not exist")]
    NodeNotFound { id: NodeId },

    #[error("nothing rendered yet: compose a scene before exporting")]
    NothingRendered,

    #[error("script error: {message}")]
    Script { message: String },
}

/// Coarse classification of a [`MapError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was invalid (empty label, deleting the root)
    Validation,
    /// The request referenced an id that does not exist
    NotFound,
    /// A required prior step has not happened yet
    Precondition,
    /// The command script could not be parsed
    Syntax,
}

impl MapError {
    /// Create a new node-not-found error
    pub fn node_not_found(id: NodeId) -> Self {
        Self::NodeNotFound { id }
    }

    /// Create a new script error
    pub fn script(message: impl Into<String>) -> Self {
        Self::Script {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MapError::EmptyLabel | MapError::RootImmutable { .. } => ErrorKind::Validation,
            MapError::NodeNotFound { .. } => ErrorKind::NotFound,
            MapError::NothingRendered => ErrorKind::Precondition,
            MapError::Script { .. } => ErrorKind::Syntax,
        }
    }
}
