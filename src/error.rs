//! Error handling and result types for B-tree operations.
//!
//! This module provides the error taxonomy for all tree operations,
//! including helper constructors and result type aliases for better
//! ergonomics.

use crate::types::Key;

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum BTreeError {
    /// The tree was constructed with an invalid order.
    InvalidConfiguration(String),
    /// A caller-side contract was violated: inserting a key that already
    /// exists, or removing one that does not. The tree is left untouched.
    PreconditionViolation(String),
    /// A structural invariant does not hold. Raised by the verification
    /// utilities only; indicates an algorithm defect, not a normal runtime
    /// condition.
    InvariantViolation(String),
}

impl BTreeError {
    /// Create an InvalidConfiguration error for an out-of-range order.
    pub fn invalid_order(order: usize, min_required: usize) -> Self {
        Self::InvalidConfiguration(format!(
            "Order {} is invalid (minimum required: {})",
            order, min_required
        ))
    }

    /// Create a PreconditionViolation for a duplicate insert.
    pub fn duplicate_key(key: Key) -> Self {
        Self::PreconditionViolation(format!("Key {} is already present in the tree", key))
    }

    /// Create a PreconditionViolation for removing an absent key.
    pub fn missing_key(key: Key) -> Self {
        Self::PreconditionViolation(format!("Key {} is not present in the tree", key))
    }

    /// Create an InvariantViolation with context.
    pub fn invariant(component: &str, details: &str) -> Self {
        Self::InvariantViolation(format!("{}: {}", component, details))
    }

    /// Check if this error is a configuration error.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }

    /// Check if this error is a precondition violation.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, Self::PreconditionViolation(_))
    }

    /// Check if this error is an invariant violation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            BTreeError::PreconditionViolation(msg) => {
                write!(f, "Precondition violation: {}", msg)
            }
            BTreeError::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Internal result type for tree operations.
pub(crate) type TreeResult<T> = Result<T, BTreeError>;

/// Public result type for tree operations that may fail.
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree construction.
pub type InitResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations.
pub type ModifyResult<T> = Result<T, BTreeError>;
