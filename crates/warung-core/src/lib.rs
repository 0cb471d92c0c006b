//! # warung-core: Pure Business Logic for Warung
//!
//! This crate is the **heart** of the Warung engine. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Warung Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Dashboard UI (out of scope)                    │   │
//! │  │    Products ──► Sales ──► Dashboard ──► Advisor ──► Settings    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 warung-store (Data Engine)                      │   │
//! │  │    Inventory ledger, sales reconciliation, summaries            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ warung-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │ reconcile │  │  report   │  │ validation│   │   │
//! │  │   │  Product  │  │ sale↔prod │  │ Summary   │  │   rules   │   │   │
//! │  │   │   Sale    │  │   join    │  │ windows   │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO AMBIENT CLOCK • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Sale, ProcessedSale, receipts)
//! - [`error`] - Validation error types
//! - [`validation`] - Pre-submission input checks
//! - [`reconcile`] - Pure join of sales against the product ledger
//! - [`report`] - Windowed aggregation (revenue, profit, buckets, top-5)
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic - same input =
//!    same output. Even "now" is an explicit parameter.
//! 2. **No I/O**: network, file system and clock access are FORBIDDEN here
//! 3. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod reconcile;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use warung_core::Product` instead of
// `use warung_core::types::Product`

pub use error::{ValidationError, ValidationResult};
pub use reconcile::{project_sale, project_sales};
pub use report::{summarize, DayBucket, ReportRange, Summary, TopProduct};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Display label for a sale whose product has been deleted.
///
/// Name resolution against the ledger must never fail; a dangling
/// reference renders as this sentinel instead. The ranking engine skips
/// such sales entirely (no stable name to group by).
pub const DELETED_PRODUCT_LABEL: &str = "Deleted product";

/// Number of entries in the dashboard's top-products ranking.
pub const TOP_PRODUCTS_LIMIT: usize = 5;
