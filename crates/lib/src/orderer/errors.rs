//! Error types for list reordering.

use thiserror::Error;

/// Structured error types for list reordering operations.
///
/// A missing *moved* item is not an error: reordering tolerates items that
/// were removed concurrently and turns the call into a no-op. A missing
/// *target* leaves no position to move to, so it is reported.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OrderError {
    /// The item a move was positioned against is not in the collection
    #[error("Reorder target not found: {id}")]
    TargetNotFound { id: String },
}

impl OrderError {
    /// Check if this error is caused by a missing item
    pub fn is_not_found(&self) -> bool {
        matches!(self, OrderError::TargetNotFound { .. })
    }

    /// Get the id if this is an id-related error
    pub fn id(&self) -> Option<&str> {
        match self {
            OrderError::TargetNotFound { id } => Some(id),
        }
    }
}

// Conversion from OrderError to the main Error type
impl From<OrderError> for crate::Error {
    fn from(err: OrderError) -> Self {
        crate::Error::Order(err)
    }
}
