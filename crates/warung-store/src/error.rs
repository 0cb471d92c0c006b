//! # Data Engine Error Types
//!
//! The full error taxonomy the dashboard branches on.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Taxonomy                                  │
//! │                                                                         │
//! │  Validation failure (client-side, pre-submission)                       │
//! │  └── DataError::Validation     - never reaches the network              │
//! │                                                                         │
//! │  Mutation rejection (server-side business rule)                         │
//! │  ├── DataError::InsufficientStock - sale exceeds current stock          │
//! │  └── DataError::DependentSales    - sales block product deletion        │
//! │                                                                         │
//! │  Unimplemented operation                                                │
//! │  └── DataError::Unsupported    - sale editing ("coming soon", not      │
//! │                                  "something went wrong")                │
//! │                                                                         │
//! │  Transport / other server failure                                       │
//! │  └── DataError::Remote         - generic message, never a crash         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each variant is distinguishable enough to render a specific message;
//! the generic fallback only applies when the server supplied none.

use thiserror::Error;

use warung_client::ApiError;
use warung_core::ValidationError;

/// Data engine errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// Client-side input validation failed; nothing was submitted.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The server refused a sale because quantity exceeds current stock.
    /// Carries enough detail to render a precise message.
    #[error("Insufficient stock for {product_name}: {available} left, requested {requested}")]
    InsufficientStock {
        product_name: String,
        available: i64,
        requested: i64,
    },

    /// The server refused a product deletion because sales reference it.
    #[error("{product_name} has recorded sales and cannot be deleted")]
    DependentSales { product_name: String },

    /// Intentional capability gap, distinct from any failure mode. Callers
    /// route users to delete-and-recreate instead.
    #[error("{operation} is not implemented")]
    Unsupported { operation: &'static str },

    /// Transport failure or a server rejection with no special handling.
    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl DataError {
    /// Text suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        match self {
            DataError::Remote(api) => api.user_message(),
            other => other.to_string(),
        }
    }
}

/// Convenience type alias for Results with DataError.
pub type DataResult<T> = Result<T, DataError>;
