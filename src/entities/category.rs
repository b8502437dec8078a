//! Category entity - Represents a product category owned by a single user.
//!
//! Each category carries an emoji icon which is shown next to its title
//! whenever a product row is displayed.

use serde::{Deserialize, Serialize};

/// Category record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: i64,
    /// Title, matched by the free-text search (e.g., "Fruits")
    pub title: String,
    /// Emoji icon (e.g., "🍎")
    pub icon: String,
    /// ID of the user who owns this category
    #[serde(alias = "ownerId")]
    pub owner_id: i64,
}

impl Category {
    /// Returns the category as shown in the product table, e.g. `"🍎 - Fruits"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}
