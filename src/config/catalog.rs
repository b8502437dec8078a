//! Reference data loading from catalog.toml
//!
//! The users, categories and products shown by the bot are bundled as a single
//! TOML file. This module only parses it; referential checks happen when the
//! parsed data is turned into a [`Catalog`](crate::core::catalog::Catalog).

use crate::{
    entities::{Category, Product, User},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// People who own categories
    #[serde(default)]
    pub users: Vec<User>,
    /// Product categories
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Products
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Parses catalog data from a TOML string.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a required field is missing.
pub fn parse_catalog(contents: &str) -> Result<CatalogFile> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog data: {e}"),
    })
}

/// Loads catalog data from a TOML file
///
/// # Arguments
/// * `path` - Path to the catalog.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogFile> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load catalog from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path_ref.display()),
    })?;

    let file = parse_catalog(&contents)?;
    tracing::info!(
        users = file.users.len(),
        categories = file.categories.len(),
        products = file.products.len(),
        "Loaded catalog from {}",
        path_ref.display()
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Sex;

    #[test]
    fn test_parse_catalog_file() {
        let toml_str = r#"
            [[users]]
            id = 1
            name = "Max"
            sex = "m"

            [[categories]]
            id = 1
            title = "Fruits"
            icon = "🍎"
            owner_id = 1

            [[products]]
            id = 1
            name = "Apple"
            category_id = 1

            [[products]]
            id = 2
            name = "Pear"
            categoryId = 1
        "#;

        let file = parse_catalog(toml_str).unwrap();
        assert_eq!(file.users.len(), 1);
        assert_eq!(file.users[0].sex, Sex::Male);
        assert_eq!(file.categories[0].icon, "🍎");
        assert_eq!(file.products.len(), 2);
        assert_eq!(file.products[1].category_id, 1);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let file = parse_catalog("").unwrap();
        assert!(file.users.is_empty());
        assert!(file.categories.is_empty());
        assert!(file.products.is_empty());
    }

    #[test]
    fn test_missing_field_is_config_error() {
        let toml_str = r#"
            [[products]]
            id = 1
            name = "Apple"
        "#;
        let err = parse_catalog(toml_str).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_catalog("does/not/exist/catalog.toml").unwrap_err();
        assert!(matches!(err, Error::Config { ref message } if message.contains("Failed to read")));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/catalog.toml");
        let file = load_catalog(path).unwrap();
        assert!(!file.products.is_empty());
    }
}
