//! # warung-client: Remote Store Collaborator
//!
//! Everything that crosses the network lives here: the JSON/HTTP client
//! for the remote store of record, the authenticated session, and the
//! advisor feed.
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven client configuration
//! - [`error`] - Transport/rejection error taxonomy and error-body decoding
//! - [`http`] - The bearer-token JSON client ([`ApiClient`])
//! - [`session`] - Login, registration, restore, profile settings
//! - [`advisor`] - AI-advisor requests fed by the reporting engine
//!
//! ## Design Principles
//!
//! 1. **Single attempt**: no retry, no backoff. A failed call surfaces its
//!    error and the caller's in-memory state stays at last-known-good.
//! 2. **Typed boundaries**: wire shapes deserialize into `warung-core`
//!    types; rejections decode into [`error::ErrorBody`].
//! 3. **No business logic**: stock rules, reconciliation and reporting
//!    belong to `warung-core` and `warung-store`.

pub mod advisor;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use advisor::Advisor;
pub use config::{ClientConfig, ConfigError};
pub use error::{codes, ApiError, ApiResult, ErrorBody, GENERIC_SERVER_ERROR};
pub use http::ApiClient;
pub use session::{Session, UserProfile};
