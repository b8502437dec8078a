//! Product filtering business logic.
//!
//! [`join_and_filter`] denormalizes each product with its category and owner
//! and keeps the rows that satisfy every active criterion. [`FilterCriteria`]
//! is an immutable value: each UI control maps to one transition that returns
//! the next criteria, which the caller stores in place of the old one.

use crate::{
    entities::{Category, EnrichedProduct, Product, User},
    errors::{Error, Result},
};
use std::collections::{BTreeSet, HashMap};

/// Active filter selections.
///
/// The default value has no active filter and lets every product through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    selected_user: Option<i64>,
    selected_categories: BTreeSet<i64>,
    query: String,
}

impl FilterCriteria {
    /// Criteria with every filter cleared.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Selects a single owner, or `None` for all users.
    #[must_use]
    pub fn with_user(self, user_id: Option<i64>) -> Self {
        Self {
            selected_user: user_id,
            ..self
        }
    }

    /// Adds the category to the selection, or removes it if already selected.
    #[must_use]
    pub fn toggle_category(mut self, category_id: i64) -> Self {
        if !self.selected_categories.remove(&category_id) {
            self.selected_categories.insert(category_id);
        }
        self
    }

    /// Clears the category selection.
    #[must_use]
    pub fn with_all_categories(self) -> Self {
        Self {
            selected_categories: BTreeSet::new(),
            ..self
        }
    }

    /// Stores the search text with leading whitespace removed.
    #[must_use]
    pub fn with_query(self, input: &str) -> Self {
        Self {
            query: input.trim_start().to_string(),
            ..self
        }
    }

    /// Clears the search text.
    #[must_use]
    pub fn clear_query(self) -> Self {
        Self {
            query: String::new(),
            ..self
        }
    }

    /// Selected owner id, if any.
    #[must_use]
    pub const fn selected_user(&self) -> Option<i64> {
        self.selected_user
    }

    /// Selected category ids.
    #[must_use]
    pub const fn selected_categories(&self) -> &BTreeSet<i64> {
        &self.selected_categories
    }

    /// Search text as entered.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when no filter is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.selected_user.is_none()
            && self.selected_categories.is_empty()
            && self.query.trim().is_empty()
    }

    // `query` must already be normalized.
    fn matches_normalized(&self, item: &EnrichedProduct<'_>, query: &str) -> bool {
        title_contains(item.category, query)
            && (self.selected_categories.is_empty()
                || self.selected_categories.contains(&item.category.id))
            && self.selected_user.is_none_or(|id| item.user.id == id)
    }
}

/// Lower-cases the query and trims both ends.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring match of an already normalized query against
/// the category title. An empty query matches everything.
#[must_use]
pub fn title_contains(category: &Category, normalized_query: &str) -> bool {
    normalized_query.is_empty() || category.title.to_lowercase().contains(normalized_query)
}

/// Joins each product with its category and the category's owner, then keeps
/// the rows that satisfy `criteria`.
///
/// Output order follows `products`. The inputs are not modified.
///
/// # Errors
/// Fails the whole pass with [`Error::IntegrityViolation`] if any product's
/// category or any category's owner does not exist, even when that product
/// would have been filtered out.
pub fn join_and_filter<'a>(
    products: &'a [Product],
    categories: &'a [Category],
    users: &'a [User],
    criteria: &FilterCriteria,
) -> Result<Vec<EnrichedProduct<'a>>> {
    let categories_by_id = index_by_id(categories.iter().map(|c| (c.id, c)));
    let users_by_id = index_by_id(users.iter().map(|u| (u.id, u)));
    let query = normalize_query(&criteria.query);

    let mut visible = Vec::new();
    for product in products {
        let item = enrich(product, &categories_by_id, &users_by_id)?;
        if criteria.matches_normalized(&item, &query) {
            visible.push(item);
        }
    }

    tracing::debug!(
        total = products.len(),
        visible = visible.len(),
        "Filtered products"
    );
    Ok(visible)
}

/// Resolves a product's category and owner.
///
/// # Errors
/// Returns [`Error::IntegrityViolation`] naming the record whose reference
/// does not resolve.
pub fn enrich<'a>(
    product: &'a Product,
    categories_by_id: &HashMap<i64, &'a Category>,
    users_by_id: &HashMap<i64, &'a User>,
) -> Result<EnrichedProduct<'a>> {
    let category = categories_by_id
        .get(&product.category_id)
        .copied()
        .ok_or(Error::IntegrityViolation {
            entity: "product",
            id: product.id,
            field: "category_id",
            missing: product.category_id,
        })?;

    let user = users_by_id
        .get(&category.owner_id)
        .copied()
        .ok_or(Error::IntegrityViolation {
            entity: "category",
            id: category.id,
            field: "owner_id",
            missing: category.owner_id,
        })?;

    Ok(EnrichedProduct {
        product,
        category,
        user,
    })
}

// First record wins on duplicate ids, like a linear scan would.
fn index_by_id<'a, T>(records: impl Iterator<Item = (i64, &'a T)>) -> HashMap<i64, &'a T> {
    let mut index = HashMap::new();
    for (id, record) in records {
        index.entry(id).or_insert(record);
    }
    index
}
