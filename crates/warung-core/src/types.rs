//! # Domain Types
//!
//! Core domain types shared across the Warung engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │ ProcessedSale   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (server)    │   │  id (server)    │   │  sale (flat)    │       │
//! │  │  name           │   │  product_id     │   │  product_name   │       │
//! │  │  selling_price  │   │  quantity       │   │  (None when     │       │
//! │  │  stock          │   │  total_price    │   │   dangling)     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Inputs:   NewProduct, SaleRequest                                      │
//! │  Receipts: SaleReceipt, SaleDeleteReceipt                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Rules
//! Every entity is owned by the remote store of record: ids and timestamps
//! are server-assigned and the client never fabricates either. The structs
//! here are the cached, read-mostly copies the engine reconciles after each
//! confirmed mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DELETED_PRODUCT_LABEL;

// =============================================================================
// Product
// =============================================================================

/// A product in the inventory ledger.
///
/// Prices are plain JSON numbers on the wire (the remote API's contract),
/// so they stay `f64` here; the engine only ever sums them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the server.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit cost (>= 0).
    pub purchase_price: f64,

    /// Unit selling price (> 0).
    pub selling_price: f64,

    /// Current stock level (>= 0). Server-authoritative: the engine only
    /// ever replaces this with a server-returned value.
    pub stock: i64,

    /// When the product was created (server clock).
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Margin earned per unit sold.
    #[inline]
    pub fn unit_margin(&self) -> f64 {
        self.selling_price - self.purchase_price
    }
}

/// Input for creating a product. The server assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub stock: i64,
}

// =============================================================================
// Sale
// =============================================================================

/// A completed, immutable sale transaction as recorded by the server.
///
/// There is no in-place edit for sales anywhere in the system; correction
/// is delete-and-recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier, assigned by the server.
    pub id: String,

    /// The product this sale drew stock from. May reference a product that
    /// has since been deleted (a dangling reference).
    pub product_id: String,

    /// Units sold (> 0).
    pub quantity: i64,

    /// Total charged for this sale.
    pub total_price: f64,

    /// Profit earned on this sale (server-computed at sale time).
    pub profit: f64,

    /// When the sale happened (server clock).
    pub created_at: DateTime<Utc>,
}

/// Input for recording a sale. Totals and profit are server-computed from
/// the product's prices at the moment of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRequest {
    pub product_id: String,
    pub quantity: i64,
}

// =============================================================================
// Processed Sale (derived view)
// =============================================================================

/// A sale joined against the current product ledger.
///
/// This is a *view*: it is recomputed whenever the underlying sale list or
/// product ledger changes and is never persisted. `product_name` is `None`
/// when the referenced product has been deleted; display code falls back to
/// [`DELETED_PRODUCT_LABEL`] via [`ProcessedSale::product_label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedSale {
    #[serde(flatten)]
    pub sale: Sale,

    /// Resolved product name, or `None` for a dangling reference.
    #[serde(rename = "productName")]
    pub product_name: Option<String>,
}

impl ProcessedSale {
    /// Display name for the sold product, with the deleted-product sentinel
    /// for dangling references. Resolution never fails.
    pub fn product_label(&self) -> &str {
        self.product_name.as_deref().unwrap_or(DELETED_PRODUCT_LABEL)
    }

    /// Whether this sale references a product that no longer exists.
    #[inline]
    pub fn is_dangling(&self) -> bool {
        self.product_name.is_none()
    }
}

// =============================================================================
// Mutation Receipts
// =============================================================================

/// Server reply to a recorded sale: the new sale plus the authoritative
/// product with its decremented stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReceipt {
    pub new_sale: Sale,
    pub updated_product: Product,
}

/// Server reply to a deleted sale. `updated_product` carries the restored
/// stock; it is absent when the product itself was already deleted, in
/// which case the ledger is left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleDeleteReceipt {
    #[serde(default)]
    pub updated_product: Option<Product>,
}

// =============================================================================
// Unit Tests
// =============================================================================
