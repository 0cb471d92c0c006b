//! # Error Types
//!
//! Validation errors for warung-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Validation failures happen *before* any network round-trip; they are the
//! client-side tier of the error taxonomy. Server-side business-rule
//! rejections (insufficient stock, dependent sales) live in the data-engine
//! crate, and transport failures in the client crate.

use thiserror::Error;

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before a mutation is submitted to the remote store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value must be strictly positive.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: &'static str },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: &'static str },
}

/// Convenience type alias for validation results.
pub type ValidationResult = Result<(), ValidationError>;
