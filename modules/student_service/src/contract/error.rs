//! Contract error types for the student registry
//!
//! These errors are transport-agnostic. A missing group (invalid input) and
//! a query that ran but matched nothing (empty result) are distinct
//! conditions; data-access failures are a third one and never collapse into
//! either of the first two.

/// Student registry domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentsError {
    /// Referenced group does not exist
    GroupNotFound {
        /// Title of the missing group
        title: String,
    },
    /// Query executed successfully but returned no rows
    EmptyResult {
        /// What was queried
        detail: String,
    },
    /// Invalid request input
    Validation {
        /// Validation error message
        message: String,
    },
    /// Data-access failure; details are logged at the call site
    Internal,
}

impl std::fmt::Display for StudentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GroupNotFound { title } => {
                write!(f, "Group not found: {}", title)
            }
            Self::EmptyResult { detail } => {
                write!(f, "Empty result: {}", detail)
            }
            Self::Validation { message } => {
                write!(f, "Validation error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for StudentsError {}
