//! Product entity - Represents a product listed under exactly one category.
//!
//! [`EnrichedProduct`] is the joined view produced by every filter pass. It
//! borrows from the catalog it was built from and is never stored.

use super::{Category, User};
use serde::{Deserialize, Serialize};

/// Product record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: i64,
    /// Name of the product (e.g., "Apple")
    pub name: String,
    /// ID of the category this product is listed under
    #[serde(alias = "categoryId")]
    pub category_id: i64,
}

/// A product joined with its category and the category's owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnrichedProduct<'a> {
    /// The product itself
    pub product: &'a Product,
    /// Category resolved through `product.category_id`
    pub category: &'a Category,
    /// User resolved through `category.owner_id`
    pub user: &'a User,
}
