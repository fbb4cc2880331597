use thiserror::Error;

use crate::{AgentIndex, PlyIndex};

/// Errors that abort a search
///
/// There is no partial result: if any node in the tree is malformed the whole search fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The game reported no legal actions for a state that is neither terminal nor at the
    /// depth limit
    #[error("agent {agent} has no legal actions at ply {ply} of a non-terminal state")]
    NoLegalActions {
        /// The agent whose turn it was
        agent: AgentIndex,
        /// The ply the empty node was found at
        ply: PlyIndex,
    },

    /// A strategy name could not be parsed
    #[error("unknown search strategy `{name}`, expected one of: {expected}")]
    UnknownStrategy {
        /// The name that was given
        name: String,
        /// The accepted names
        expected: String,
    },
}

/// Convenience Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
