//! # Validation Module
//!
//! Pre-submission input validation for Warung.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (client-side, pre-submission)                     │
//! │  ├── Missing/invalid form fields                                        │
//! │  └── Never reaches the network; surfaced immediately                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Remote store (server-side, business rules)                    │
//! │  ├── Stock sufficiency on sale                                          │
//! │  ├── Dependent sales block product deletion                             │
//! │  └── Surfaced by the data engine as typed rejections                    │
//! │                                                                         │
//! │  Defense in depth: each layer catches different errors                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{NewProduct, Product, SaleRequest};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_name(name: &str) -> ValidationResult {
    if name.trim().is_empty() {
        return Err(ValidationError::Required { field: "name" });
    }
    Ok(())
}

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be strictly positive. Stock sufficiency is NOT checked here:
///   the server is the sole arbiter of stock.
pub fn validate_quantity(quantity: i64) -> ValidationResult {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive { field: "quantity" });
    }
    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates product fields shared by create and update.
///
/// ## Rules
/// - `name` non-empty
/// - `purchase_price` >= 0 (zero is allowed: donated or promo stock)
/// - `selling_price` > 0
/// - `stock` >= 0
fn validate_product_fields(
    name: &str,
    purchase_price: f64,
    selling_price: f64,
    stock: i64,
) -> ValidationResult {
    validate_product_name(name)?;

    if purchase_price < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "purchase_price",
        });
    }

    if selling_price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "selling_price",
        });
    }

    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative { field: "stock" });
    }

    Ok(())
}

/// Validates a product creation input before it is submitted.
pub fn validate_new_product(input: &NewProduct) -> ValidationResult {
    validate_product_fields(
        &input.name,
        input.purchase_price,
        input.selling_price,
        input.stock,
    )
}

/// Validates a full product replacement before it is submitted.
pub fn validate_product(product: &Product) -> ValidationResult {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required { field: "id" });
    }
    validate_product_fields(
        &product.name,
        product.purchase_price,
        product.selling_price,
        product.stock,
    )
}

/// Validates a sale request before it is submitted.
pub fn validate_sale_request(request: &SaleRequest) -> ValidationResult {
    if request.product_id.trim().is_empty() {
        return Err(ValidationError::Required { field: "product_id" });
    }
    validate_quantity(request.quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================
