//! User entity - Represents a person who owns one or more categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sex of a user, serialized as `"m"` or `"f"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    #[serde(rename = "m")]
    Male,
    /// Female
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Marker shown next to a user's name in the product table.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Male => "♂",
            Self::Female => "♀",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("m"),
            Self::Female => f.write_str("f"),
        }
    }
}

/// User record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,
    /// Display name (e.g., "Max")
    pub name: String,
    /// Sex, used to mark the user in the product table
    pub sex: Sex,
}
