//! Error types for post reconciliation.

use std::fmt;

use posts_client::PostsError;
use thiserror::Error;

/// Result type for reconciler operations.
pub type Result<T> = std::result::Result<T, ReconcileError>;

/// Reconciler operations, used to label failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    Add,
    Edit,
    Remove,
}

impl Operation {
    /// Message shown to the user when this operation fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Initialize => "Error retrieving posts.",
            Operation::Add => "Error creating post.",
            Operation::Edit => "Error updating post.",
            Operation::Remove => "Error deleting post.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Initialize => "initialize",
            Operation::Add => "add",
            Operation::Edit => "edit",
            Operation::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// Why a mutating operation was not applied.
#[derive(Debug, Error)]
pub enum FailureCause {
    /// The remote store call failed
    #[error(transparent)]
    Store(#[from] PostsError),

    /// The store answered for a different post than the one requested
    #[error("store returned post {returned} for requested post {requested}")]
    IdentifierMismatch { requested: i64, returned: i64 },
}

#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Initial listing failed; the session cannot recover
    #[error("failed to load posts: {0}")]
    InitializeFailed(#[source] PostsError),

    /// A mutation failed after the session was ready; the collection is unchanged
    #[error("{operation} failed: {cause}")]
    OperationFailed {
        operation: Operation,
        #[source]
        cause: FailureCause,
    },

    /// The operation is not allowed in the session's current state
    #[error("cannot {operation} while session is {state}")]
    InvalidState {
        operation: Operation,
        state: &'static str,
    },
}

impl ReconcileError {
    pub fn operation(&self) -> Operation {
        match self {
            ReconcileError::InitializeFailed(_) => Operation::Initialize,
            ReconcileError::OperationFailed { operation, .. }
            | ReconcileError::InvalidState { operation, .. } => *operation,
        }
    }

    /// True when the session can keep going after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ReconcileError::InitializeFailed(_))
    }
}
