use crate::foundation::core::{EdgeKey, VertexId};

/// Convenience result alias used across the crate.
pub type PlaybackResult<T> = Result<T, PlaybackError>;

/// A step line that could not be turned into a [`StepEvent`](crate::StepEvent).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line does not start with any known step prefix.
    #[error("unknown step kind: '{line}'")]
    UnknownStepKind {
        /// Offending line.
        line: String,
    },

    /// `Initialize:` payload without a left and a right vertex group.
    #[error("malformed initialize step (expected two vertex groups): '{line}'")]
    MalformedInitialize {
        /// Offending line.
        line: String,
    },

    /// An edge token that is not exactly `v1,v2`.
    #[error("malformed edge pair '{token}'")]
    MalformedEdgePair {
        /// Offending token, parentheses removed.
        token: String,
    },
}

/// Lookup and insertion failures of the [`GraphRegistry`](crate::GraphRegistry).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Vertex name already registered.
    #[error("duplicate vertex '{0}'")]
    DuplicateVertex(VertexId),

    /// Edge key already registered.
    #[error("duplicate edge '{0}'")]
    DuplicateEdge(EdgeKey),

    /// Vertex name was never registered.
    #[error("unknown vertex '{0}'")]
    UnknownVertex(VertexId),

    /// No edge under this exact key.
    #[error("edge not found '{0}'")]
    EdgeNotFound(EdgeKey),
}

/// Crate-level error.
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    /// Step line parse failure.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Graph registry failure.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Invalid playback configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Renderer collaborator rejected an operation.
    #[error("render error: {0}")]
    Render(String),

    /// Catch-all for IO and other wrapped failures.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlaybackError {
    /// Build a [`PlaybackError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`PlaybackError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
