//! # API Error Types
//!
//! Transport-level error taxonomy for the remote store collaborator.
//!
//! ## Where Errors Come From
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Error Sources                                    │
//! │                                                                         │
//! │  Request never completes (DNS, refused, timeout)                        │
//! │       └── ApiError::Transport ── generic user message                   │
//! │                                                                         │
//! │  Non-2xx response                                                       │
//! │       └── ApiError::Rejected { status, body }                           │
//! │            ├── body.message  → user-facing text (server-supplied)       │
//! │            ├── body.code     → machine code for typed mapping           │
//! │            └── non-JSON body → empty body, generic fallback text        │
//! │                                                                         │
//! │  2xx with an undecodable body                                           │
//! │       └── ApiError::Decode                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The data engine (warung-store) maps `Rejected` bodies onto its typed
//! business-rule conditions; this crate only guarantees the body is
//! decoded when possible and a readable message always exists.

use serde::Deserialize;
use thiserror::Error;

/// Fallback text when the server supplied no message.
pub const GENERIC_SERVER_ERROR: &str = "An unexpected error occurred on the server.";

/// Machine-readable rejection codes the backend attaches to business-rule
/// failures. Absence of a code degrades to the plain message.
pub mod codes {
    /// Sale quantity exceeds the product's current stock.
    pub const INSUFFICIENT_STOCK: &str = "insufficient_stock";
    /// Product deletion refused because sales reference it.
    pub const PRODUCT_HAS_SALES: &str = "product_has_sales";
    /// Registration with an email that already has an account.
    pub const EMAIL_TAKEN: &str = "email_taken";
    /// Password change with a wrong current password.
    pub const WRONG_PASSWORD: &str = "wrong_password";
}

/// Decoded JSON body of a non-2xx response.
///
/// Every field is optional: the contract only promises `message`, and a
/// non-JSON body decodes to the all-`None` default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// User-facing text supplied by the server.
    #[serde(default)]
    pub message: Option<String>,

    /// Machine code for business-rule rejections (see [`codes`]).
    #[serde(default)]
    pub code: Option<String>,

    /// For insufficient-stock rejections: the product's display name.
    #[serde(default, rename = "productName")]
    pub product_name: Option<String>,

    /// For insufficient-stock rejections: the remaining stock.
    #[serde(default)]
    pub stock: Option<i64>,
}

/// Errors from the remote store collaborator.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure: the request never produced a response. Degrades to
    /// a generic message; never crashes the caller.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{}", .body.message.as_deref().unwrap_or(GENERIC_SERVER_ERROR))]
    Rejected { status: u16, body: ErrorBody },

    /// A 2xx response carried a body this client could not decode.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of a server rejection, if this was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Machine code attached to a server rejection, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { body, .. } => body.code.as_deref(),
            _ => None,
        }
    }

    /// Decoded rejection body, if this was a server rejection.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::Rejected { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Text suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { body, .. } => body
                .message
                .clone()
                .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
            _ => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_server_message() {
        let err = ApiError::Rejected {
            status: 400,
            body: ErrorBody {
                message: Some("Stok tidak cukup".to_string()),
                code: Some(codes::INSUFFICIENT_STOCK.to_string()),
                product_name: Some("Kopi Susu".to_string()),
                stock: Some(5),
            },
        };
        assert_eq!(err.to_string(), "Stok tidak cukup");
        assert_eq!(err.code(), Some(codes::INSUFFICIENT_STOCK));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_rejection_without_message_falls_back() {
        let err = ApiError::Rejected {
            status: 500,
            body: ErrorBody::default(),
        };
        assert_eq!(err.to_string(), GENERIC_SERVER_ERROR);
        assert_eq!(err.user_message(), GENERIC_SERVER_ERROR);
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_error_body_decodes_partial_json() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Produk tidak ditemukan"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Produk tidak ditemukan"));
        assert!(body.code.is_none());
        assert!(body.stock.is_none());
    }

    #[test]
    fn test_error_body_decodes_stock_detail() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"message":"Insufficient stock","code":"insufficient_stock","productName":"Kopi","stock":3}"#,
        )
        .unwrap();
        assert_eq!(body.code.as_deref(), Some(codes::INSUFFICIENT_STOCK));
        assert_eq!(body.product_name.as_deref(), Some("Kopi"));
        assert_eq!(body.stock, Some(3));
    }
}
