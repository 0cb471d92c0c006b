//! # Remote Store Seam
//!
//! The trait boundary between the data engine and the server.
//!
//! Production wires [`warung_client::ApiClient`] through this trait; tests
//! inject an in-memory double that mirrors the server's business rules
//! (stock sufficiency, dependent-sales deletion block, stock restore on
//! sale deletion). The engine itself never cares which one it talks to.

use async_trait::async_trait;

use warung_client::{ApiClient, ApiResult};
use warung_core::{NewProduct, Product, Sale, SaleDeleteReceipt, SaleReceipt, SaleRequest};

/// The remote store of record, as the data engine sees it.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetches the full product set.
    async fn list_products(&self) -> ApiResult<Vec<Product>>;

    /// Creates a product; the server assigns id and created_at.
    async fn create_product(&self, input: &NewProduct) -> ApiResult<Product>;

    /// Full replacement by id. No partial/field-level update semantics.
    async fn update_product(&self, product: &Product) -> ApiResult<Product>;

    /// Deletes a product. Refused when sales reference it.
    async fn delete_product(&self, id: &str) -> ApiResult<()>;

    /// Fetches all raw sales in server order.
    async fn list_sales(&self) -> ApiResult<Vec<Sale>>;

    /// Records a sale. The server is the sole arbiter of stock sufficiency
    /// and replies with the new sale plus the authoritative product.
    async fn create_sale(&self, request: &SaleRequest) -> ApiResult<SaleReceipt>;

    /// Deletes a sale; the reply carries the stock-restored product when
    /// the product still exists.
    async fn delete_sale(&self, id: &str) -> ApiResult<SaleDeleteReceipt>;
}

#[async_trait]
impl RemoteStore for ApiClient {
    async fn list_products(&self) -> ApiResult<Vec<Product>> {
        self.get("/products").await
    }

    async fn create_product(&self, input: &NewProduct) -> ApiResult<Product> {
        self.post("/products", input).await
    }

    async fn update_product(&self, product: &Product) -> ApiResult<Product> {
        self.put(&format!("/products/{}", product.id), product).await
    }

    async fn delete_product(&self, id: &str) -> ApiResult<()> {
        self.delete::<serde_json::Value>(&format!("/products/{id}"))
            .await?;
        Ok(())
    }

    async fn list_sales(&self) -> ApiResult<Vec<Sale>> {
        self.get("/sales").await
    }

    async fn create_sale(&self, request: &SaleRequest) -> ApiResult<SaleReceipt> {
        self.post("/sales", request).await
    }

    async fn delete_sale(&self, id: &str) -> ApiResult<SaleDeleteReceipt> {
        // An empty reply means the sale is gone and no product came back.
        Ok(self
            .delete(&format!("/sales/{id}"))
            .await?
            .unwrap_or_default())
    }
}
