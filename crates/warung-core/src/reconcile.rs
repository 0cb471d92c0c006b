//! # Sale Reconciliation
//!
//! Pure join of raw sale records against the current product ledger.
//!
//! A [`ProcessedSale`] is a derived view: the engine recomputes it whenever
//! the sale list or product ledger changes, never hand-maintains it. A sale
//! whose `product_id` no longer matches a live product (a dangling
//! reference) projects with `product_name: None`; display code falls back
//! to the deleted-product sentinel. Resolution never fails.

use crate::types::{ProcessedSale, Product, Sale};

/// Projects a single sale against the product ledger.
pub fn project_sale(sale: &Sale, products: &[Product]) -> ProcessedSale {
    let product_name = products
        .iter()
        .find(|p| p.id == sale.product_id)
        .map(|p| p.name.clone());

    ProcessedSale {
        sale: sale.clone(),
        product_name,
    }
}

/// Projects a batch of sales, preserving the server's order.
pub fn project_sales(sales: &[Sale], products: &[Product]) -> Vec<ProcessedSale> {
    sales
        .iter()
        .map(|sale| project_sale(sale, products))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DELETED_PRODUCT_LABEL;
    use chrono::Utc;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            purchase_price: 7000.0,
            selling_price: 10000.0,
            stock: 10,
            created_at: Utc::now(),
        }
    }

    fn sale(id: &str, product_id: &str) -> Sale {
        Sale {
            id: id.to_string(),
            product_id: product_id.to_string(),
            quantity: 1,
            total_price: 10000.0,
            profit: 3000.0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_project_resolves_live_product_name() {
        let products = vec![product("p-1", "Nasi Goreng"), product("p-2", "Es Jeruk")];
        let processed = project_sale(&sale("s-1", "p-2"), &products);

        assert_eq!(processed.product_name.as_deref(), Some("Es Jeruk"));
        assert_eq!(processed.product_label(), "Es Jeruk");
    }

    #[test]
    fn test_project_dangling_reference_uses_sentinel() {
        let products = vec![product("p-1", "Nasi Goreng")];
        let processed = project_sale(&sale("s-1", "p-gone"), &products);

        assert!(processed.is_dangling());
        assert_eq!(processed.product_label(), DELETED_PRODUCT_LABEL);
    }

    #[test]
    fn test_project_sales_preserves_order() {
        let products = vec![product("p-1", "Nasi Goreng")];
        let sales = vec![sale("s-1", "p-1"), sale("s-2", "p-gone"), sale("s-3", "p-1")];

        let processed = project_sales(&sales, &products);

        let ids: Vec<&str> = processed.iter().map(|s| s.sale.id.as_str()).collect();
        assert_eq!(ids, vec!["s-1", "s-2", "s-3"]);
    }
}
