//! # Data Store
//!
//! The in-memory data engine: inventory ledger + sales reconciliation.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mutation Flow                                    │
//! │                                                                         │
//! │  UI action                                                              │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  validate (client-side) ── invalid? ──► DataError::Validation           │
//! │      │                                  (network never touched)         │
//! │      ▼                                                                  │
//! │  remote mutation ── rejected? ──► typed DataError                       │
//! │      │                            (snapshot stays last-known-good)      │
//! │      ▼                                                                  │
//! │  apply server-returned entities to the snapshot                         │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  derived views (ProcessedSale, Summary) recomputed from the             │
//! │  authoritative (products, sales) pair on read                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The snapshot is wrapped in `Mutex` because the store is shared between
//! the UI task and the session listener. Writes happen only after a remote
//! call has completed, and the lock is never held across an await.
//!
//! ## Record-Sale Ordering
//! Applying a sale is an explicit two-step transaction: the authoritative
//! product update is merged into the ledger FIRST, and only then is the new
//! sale projected against the ledger and prepended. The dependent
//! projection never observes pre-sale stock or a stale name.

use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::{debug, info};

use warung_client::{codes, ApiError};
use warung_core::{
    project_sale, project_sales, summarize, validation, NewProduct, ProcessedSale, Product,
    ReportRange, Sale, SaleRequest, Summary,
};

use crate::error::{DataError, DataResult};
use crate::remote::RemoteStore;

/// The authoritative-as-of-last-sync snapshot.
#[derive(Debug, Default)]
struct Snapshot {
    products: Vec<Product>,
    sales: Vec<Sale>,
}

/// Replaces the ledger entry with the same id, or appends when absent.
fn merge_product(products: &mut Vec<Product>, updated: Product) {
    match products.iter_mut().find(|p| p.id == updated.id) {
        Some(slot) => *slot = updated,
        None => products.push(updated),
    }
}

/// The client-side data engine.
///
/// An explicit service object: construct one per session and inject it into
/// call sites. Populated on login, cleared on logout; every mutation is a
/// round-trip to the remote store followed by reconciliation of the
/// server-returned entities.
pub struct DataStore {
    remote: Arc<dyn RemoteStore>,
    snapshot: Mutex<Snapshot>,
}

impl DataStore {
    /// Creates an empty store over a remote collaborator.
    pub fn new(remote: Arc<dyn RemoteStore>) -> Self {
        DataStore {
            remote,
            snapshot: Mutex::new(Snapshot::default()),
        }
    }

    fn with_snapshot<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Snapshot) -> R,
    {
        let snapshot = self.snapshot.lock().expect("snapshot mutex poisoned");
        f(&snapshot)
    }

    fn with_snapshot_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Snapshot) -> R,
    {
        let mut snapshot = self.snapshot.lock().expect("snapshot mutex poisoned");
        f(&mut snapshot)
    }

    // =========================================================================
    // Snapshot Lifecycle
    // =========================================================================

    /// Fetches the full snapshot and replaces the cache wholesale.
    /// Subsequent reads reflect only server-confirmed state.
    pub async fn load(&self) -> DataResult<()> {
        let products = self.remote.list_products().await?;
        let sales = self.remote.list_sales().await?;

        info!(
            products = products.len(),
            sales = sales.len(),
            "snapshot loaded"
        );

        self.with_snapshot_mut(|s| {
            s.products = products;
            s.sales = sales;
        });
        Ok(())
    }

    /// Discards the snapshot (logout).
    pub fn clear(&self) {
        debug!("snapshot cleared");
        self.with_snapshot_mut(|s| {
            s.products.clear();
            s.sales.clear();
        });
    }

    /// Reacts to the session's authenticated/unauthenticated transition:
    /// full load on login, full clear on logout.
    pub async fn handle_session_change(&self, authenticated: bool) -> DataResult<()> {
        if authenticated {
            self.load().await
        } else {
            self.clear();
            Ok(())
        }
    }

    // =========================================================================
    // Reads (derived views recomputed from the snapshot)
    // =========================================================================

    /// Current product ledger.
    pub fn products(&self) -> Vec<Product> {
        self.with_snapshot(|s| s.products.clone())
    }

    /// Sales joined against the current ledger, in server order with the
    /// most recent local recordings first.
    pub fn sales(&self) -> Vec<ProcessedSale> {
        self.with_snapshot(|s| project_sales(&s.sales, &s.products))
    }

    /// Aggregated dashboard metrics for a window, anchored at the local
    /// observer's current moment.
    pub fn summary(&self, range: ReportRange) -> Summary {
        self.with_snapshot(|s| {
            let processed = project_sales(&s.sales, &s.products);
            summarize(&processed, &s.products, range, Local::now())
        })
    }

    // =========================================================================
    // Product Mutations
    // =========================================================================

    /// Submits a new product; on success appends the server-returned entity
    /// (with its server-assigned id) to the ledger.
    pub async fn add_product(&self, input: NewProduct) -> DataResult<Product> {
        validation::validate_new_product(&input)?;

        let created = self.remote.create_product(&input).await?;
        info!(id = %created.id, name = %created.name, "product added");

        self.with_snapshot_mut(|s| s.products.push(created.clone()));
        Ok(created)
    }

    /// Submits a full replacement by id; on success replaces the matching
    /// ledger entry.
    pub async fn update_product(&self, product: Product) -> DataResult<Product> {
        validation::validate_product(&product)?;

        let updated = self.remote.update_product(&product).await?;
        info!(id = %updated.id, "product updated");

        self.with_snapshot_mut(|s| merge_product(&mut s.products, updated.clone()));
        Ok(updated)
    }

    /// Submits a delete by id; on success removes the ledger entry. A
    /// product with dependent sales is refused by the server and surfaces
    /// as [`DataError::DependentSales`], leaving the ledger untouched.
    pub async fn delete_product(&self, id: &str) -> DataResult<()> {
        if let Err(err) = self.remote.delete_product(id).await {
            return Err(self.classify_product_rejection(err, id));
        }

        info!(id = %id, "product deleted");
        self.with_snapshot_mut(|s| s.products.retain(|p| p.id != id));
        Ok(())
    }

    // =========================================================================
    // Sale Mutations
    // =========================================================================

    /// Records a sale. The server arbitrates stock sufficiency; on
    /// rejection the snapshot is untouched and the caller receives
    /// [`DataError::InsufficientStock`] naming the product and its
    /// remaining stock.
    pub async fn record_sale(&self, request: SaleRequest) -> DataResult<ProcessedSale> {
        validation::validate_sale_request(&request)?;

        let receipt = match self.remote.create_sale(&request).await {
            Ok(receipt) => receipt,
            Err(err) => return Err(self.classify_sale_rejection(err, &request)),
        };

        info!(
            sale_id = %receipt.new_sale.id,
            product_id = %request.product_id,
            quantity = request.quantity,
            stock = receipt.updated_product.stock,
            "sale recorded"
        );

        let processed = self.with_snapshot_mut(|s| {
            // Ledger update strictly precedes the dependent projection.
            merge_product(&mut s.products, receipt.updated_product);
            let processed = project_sale(&receipt.new_sale, &s.products);
            s.sales.insert(0, receipt.new_sale);
            processed
        });
        Ok(processed)
    }

    /// Sale editing is an intentional capability gap: always fails with
    /// [`DataError::Unsupported`], touching neither the network nor the
    /// snapshot. Callers route users to delete-and-recreate.
    pub async fn update_sale(&self, _id: &str, _changes: SaleRequest) -> DataResult<ProcessedSale> {
        Err(DataError::Unsupported {
            operation: "sale editing",
        })
    }

    /// Deletes a sale. When the server returns the stock-restored product
    /// it is merged into the ledger; when it does not (the product was
    /// already deleted) the ledger is left unchanged, which is expected.
    pub async fn delete_sale(&self, id: &str) -> DataResult<()> {
        let receipt = self.remote.delete_sale(id).await?;

        info!(
            sale_id = %id,
            restored = receipt.updated_product.is_some(),
            "sale deleted"
        );

        self.with_snapshot_mut(|s| {
            if let Some(updated) = receipt.updated_product {
                merge_product(&mut s.products, updated);
            }
            s.sales.retain(|sale| sale.id != id);
        });
        Ok(())
    }

    // =========================================================================
    // Rejection Mapping
    // =========================================================================

    /// Maps a create-sale rejection to the typed condition, backfilling
    /// product name and remaining stock from the ledger when the server
    /// omitted them.
    fn classify_sale_rejection(&self, err: ApiError, request: &SaleRequest) -> DataError {
        match err {
            ApiError::Rejected { ref body, .. }
                if body.code.as_deref() == Some(codes::INSUFFICIENT_STOCK) =>
            {
                let (ledger_name, ledger_stock) = self.with_snapshot(|s| {
                    s.products
                        .iter()
                        .find(|p| p.id == request.product_id)
                        .map(|p| (Some(p.name.clone()), Some(p.stock)))
                        .unwrap_or((None, None))
                });
                DataError::InsufficientStock {
                    product_name: body
                        .product_name
                        .clone()
                        .or(ledger_name)
                        .unwrap_or_else(|| request.product_id.clone()),
                    available: body.stock.or(ledger_stock).unwrap_or(0),
                    requested: request.quantity,
                }
            }
            other => DataError::Remote(other),
        }
    }

    /// Maps a delete-product rejection to the typed condition.
    fn classify_product_rejection(&self, err: ApiError, product_id: &str) -> DataError {
        match err {
            ApiError::Rejected { ref body, .. }
                if body.code.as_deref() == Some(codes::PRODUCT_HAS_SALES) =>
            {
                let ledger_name = self.with_snapshot(|s| {
                    s.products
                        .iter()
                        .find(|p| p.id == product_id)
                        .map(|p| p.name.clone())
                });
                DataError::DependentSales {
                    product_name: body
                        .product_name
                        .clone()
                        .or(ledger_name)
                        .unwrap_or_else(|| product_id.to_string()),
                }
            }
            other => DataError::Remote(other),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
