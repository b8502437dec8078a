//! Shared test utilities.
//!
//! Provides record constructors with terse signatures and a small sample
//! catalog used across the core and bot tests:
//!
//! | Product | Category | Owner |
//! |---------|----------|-------|
//! | 1 Apple | 1 🍎 Fruits | 1 Max (m) |
//! | 2 Bread | 2 🍞 Grocery | 2 Anna (f) |
//! | 3 Milk | 3 🍺 Drinks | 2 Anna (f) |
//! | 4 Banana | 1 🍎 Fruits | 1 Max (m) |
//! | 5 Beer | 3 🍺 Drinks | 2 Anna (f) |
//!
//! User 3 John owns nothing.

#![allow(clippy::unwrap_used)]

use crate::{
    core::catalog::Catalog,
    entities::{Category, Product, User},
};

pub use crate::entities::Sex;

/// Creates a user record.
pub fn user(id: i64, name: &str, sex: Sex) -> User {
    User {
        id,
        name: name.to_string(),
        sex,
    }
}

/// Creates a category record.
pub fn category(id: i64, title: &str, icon: &str, owner_id: i64) -> Category {
    Category {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id,
    }
}

/// Creates a product record.
pub fn product(id: i64, name: &str, category_id: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
    }
}

/// Users of the sample catalog.
pub fn sample_users() -> Vec<User> {
    vec![
        user(1, "Max", Sex::Male),
        user(2, "Anna", Sex::Female),
        user(3, "John", Sex::Male),
    ]
}

/// Categories of the sample catalog.
pub fn sample_categories() -> Vec<Category> {
    vec![
        category(1, "Fruits", "🍎", 1),
        category(2, "Grocery", "🍞", 2),
        category(3, "Drinks", "🍺", 2),
    ]
}

/// Products of the sample catalog.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(1, "Apple", 1),
        product(2, "Bread", 2),
        product(3, "Milk", 3),
        product(4, "Banana", 1),
        product(5, "Beer", 3),
    ]
}

/// The validated sample catalog described in the module docs.
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_users(), sample_categories(), sample_products()).unwrap()
}

/// Ids of the given rows, in order.
pub fn ids(rows: &[crate::entities::EnrichedProduct<'_>]) -> Vec<i64> {
    rows.iter().map(|row| row.product.id).collect()
}
