//! Contract error types for the ore lot service
//!
//! These errors are transport-agnostic; the REST layer maps them to
//! Problem Details responses.

/// Ore lot service domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OreLotError {
    /// No lot with the given id
    NotFound {
        /// Lot id that missed
        id: i32,
    },
    /// Duplicate lot code on create, or referential constraint on delete
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// Input rejected by a validation rule
    Validation {
        /// Exactly which rule failed
        message: String,
    },
    /// Unexpected storage failure
    Internal,
}

impl OreLotError {
    /// Conflict raised when a create collides with an existing lot code,
    /// whether caught by the pre-check or by the unique index itself.
    pub fn duplicate_code(lot_code: &str) -> Self {
        Self::Conflict {
            reason: format!("an ore lot with lotCode '{}' already exists", lot_code),
        }
    }

    /// Conflict raised when a delete trips a referential constraint.
    pub fn referenced_elsewhere(id: i32) -> Self {
        Self::Conflict {
            reason: format!(
                "ore lot {} is referenced by other records and cannot be deleted",
                id
            ),
        }
    }
}

impl std::fmt::Display for OreLotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { id } => {
                write!(f, "ore lot not found: {}", id)
            }
            Self::Conflict { reason } => {
                write!(f, "Conflict: {}", reason)
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

impl std::error::Error for OreLotError {}
