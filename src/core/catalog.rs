//! Catalog business logic - validated, immutable reference data.
//!
//! A [`Catalog`] can only be built from data whose identifiers are unique and
//! whose references all resolve, so every filter pass over it is infallible in
//! practice. Validation runs once, at load time.

use crate::{
    config::catalog::CatalogFile,
    core::filter::{self, FilterCriteria},
    entities::{Category, EnrichedProduct, Product, User},
    errors::{Error, Result},
};
use std::collections::HashSet;

/// Discord autocomplete limit
pub const AUTOCOMPLETE_LIMIT: usize = 25;

/// Users, categories and products that passed referential validation.
#[derive(Debug, Clone)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating identity and referential integrity.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Two records of the same kind share an id ([`Error::DuplicateId`])
    /// - A category's `owner_id` or a product's `category_id` does not resolve
    ///   ([`Error::IntegrityViolation`])
    pub fn new(
        users: Vec<User>,
        categories: Vec<Category>,
        products: Vec<Product>,
    ) -> Result<Self> {
        let user_ids = unique_ids("user", users.iter().map(|u| u.id))?;
        let category_ids = unique_ids("category", categories.iter().map(|c| c.id))?;
        unique_ids("product", products.iter().map(|p| p.id))?;

        if let Some(category) = categories.iter().find(|c| !user_ids.contains(&c.owner_id)) {
            return Err(Error::IntegrityViolation {
                entity: "category",
                id: category.id,
                field: "owner_id",
                missing: category.owner_id,
            });
        }

        if let Some(product) = products
            .iter()
            .find(|p| !category_ids.contains(&p.category_id))
        {
            return Err(Error::IntegrityViolation {
                entity: "product",
                id: product.id,
                field: "category_id",
                missing: product.category_id,
            });
        }

        tracing::info!(
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "Catalog validated"
        );

        Ok(Self {
            users,
            categories,
            products,
        })
    }

    /// Builds a catalog from a parsed data file.
    ///
    /// # Errors
    /// Same as [`Catalog::new`].
    pub fn from_file(file: CatalogFile) -> Result<Self> {
        Self::new(file.users, file.categories, file.products)
    }

    /// All users, in file order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All categories, in file order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products, in file order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Finds a user by id.
    #[must_use]
    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Finds a category by id.
    #[must_use]
    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Finds a user by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn user_by_name(&self, name: &str) -> Option<&User> {
        let needle = name.trim().to_lowercase();
        self.users.iter().find(|u| u.name.to_lowercase() == needle)
    }

    /// Finds a category by title, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn category_by_title(&self, title: &str) -> Option<&Category> {
        let needle = title.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.title.to_lowercase() == needle)
    }

    /// User names containing `partial` (case-insensitive), sorted, at most
    /// [`AUTOCOMPLETE_LIMIT`] of them.
    #[must_use]
    pub fn user_names_matching(&self, partial: &str) -> Vec<String> {
        matching_names(self.users.iter().map(|u| u.name.as_str()), partial)
    }

    /// Category titles containing `partial` (case-insensitive), sorted, at most
    /// [`AUTOCOMPLETE_LIMIT`] of them.
    #[must_use]
    pub fn category_titles_matching(&self, partial: &str) -> Vec<String> {
        matching_names(self.categories.iter().map(|c| c.title.as_str()), partial)
    }

    /// Joins every product with its category and owner and keeps the rows that
    /// satisfy `criteria`, in product order.
    ///
    /// # Errors
    /// Returns [`Error::IntegrityViolation`] on a dangling reference, which a
    /// validated catalog never contains.
    pub fn visible_products(&self, criteria: &FilterCriteria) -> Result<Vec<EnrichedProduct<'_>>> {
        filter::join_and_filter(&self.products, &self.categories, &self.users, criteria)
    }
}

fn unique_ids(entity: &'static str, ids: impl Iterator<Item = i64>) -> Result<HashSet<i64>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId { entity, id });
        }
    }
    Ok(seen)
}

fn matching_names<'a>(names: impl Iterator<Item = &'a str>, partial: &str) -> Vec<String> {
    let partial_lower = partial.trim().to_lowercase();

    let mut matching: Vec<String> = names
        .filter(|name| name.to_lowercase().contains(&partial_lower))
        .map(str::to_string)
        .collect();

    // Sort alphabetically for consistent UX
    matching.sort();
    matching.truncate(AUTOCOMPLETE_LIMIT);
    matching
}
