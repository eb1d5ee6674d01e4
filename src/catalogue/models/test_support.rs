//! Test helpers for constructing `Product` fixtures.
//!
//! # Examples
//!
//! ```
//! use curator::catalogue::models::test_support::{pending_product, product_with_id};
//! use curator::catalogue::models::ReviewStatus;
//!
//! let product = pending_product(1, "Acme CRM");
//! assert_eq!(product.status, ReviewStatus::Pending);
//!
//! let other = product_with_id(7);
//! assert_eq!(other.name, "Product 7");
//! ```

use super::{Product, ProductCategory, ProductId, ReviewStatus};

/// Constructs a pending product with the given id and name.
///
/// Optional fields are left empty and the category is `other`.
#[must_use]
pub fn pending_product(id: u64, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: format!("{name} description"),
        logo: None,
        website: None,
        category: ProductCategory::Other,
        status: ReviewStatus::Pending,
        processing_status: None,
        created_at: None,
        updated_at: None,
    }
}

/// Constructs an approved product with the given id and name.
#[must_use]
pub fn approved_product(id: u64, name: &str) -> Product {
    Product {
        status: ReviewStatus::Approved,
        ..pending_product(id, name)
    }
}

/// Creates a pending product named `Product {id}`.
#[must_use]
pub fn product_with_id(id: u64) -> Product {
    pending_product(id, &format!("Product {id}"))
}

/// Creates pending products with sequential ids starting from 1.
#[must_use]
pub fn pending_products(count: u64) -> Vec<Product> {
    (1..=count).map(product_with_id).collect()
}
