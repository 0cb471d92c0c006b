//! # Warung Store
//!
//! The client-local data engine: an in-memory snapshot of the business,
//! kept reconciled with the remote store of record.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          warung-store                                   │
//! │                                                                         │
//! │   ┌───────────────┐      ┌───────────────┐      ┌───────────────┐      │
//! │   │   DataStore   │─────▶│  RemoteStore  │─────▶│   ApiClient   │      │
//! │   │  (snapshot +  │      │   (seam)      │      │ (warung-client)│      │
//! │   │   mutations)  │      └───────────────┘      └───────────────┘      │
//! │   └───────┬───────┘                                                    │
//! │           │ derived views on read                                      │
//! │           ▼                                                            │
//! │   ProcessedSale / Summary  (warung-core, pure)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every mutation validates locally, round-trips to the server, and only
//! then applies the server-returned entities to the snapshot. A rejected
//! mutation leaves the snapshot at last-known-good.

pub mod error;
pub mod remote;
pub mod store;

pub use error::{DataError, DataResult};
pub use remote::RemoteStore;
pub use store::DataStore;
