//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Reference data is
//! validated once when the catalog is built, so integrity errors surface at
//! startup with the offending record named in the message.

use thiserror::Error;

/// Errors produced while loading, validating, filtering or presenting the catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// The data file or a setting could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the failure
        message: String,
    },

    /// A required environment variable is missing.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Two records in the same dataset share an id.
    #[error("Duplicate {entity} id {id}")]
    DuplicateId {
        /// Dataset the duplicate was found in ("user", "category", "product")
        entity: &'static str,
        /// The repeated identifier
        id: i64,
    },

    /// A foreign-key style reference does not resolve to an existing record.
    #[error("Integrity violation: {entity} {id} has {field} = {missing}, which does not exist")]
    IntegrityViolation {
        /// Kind of the record holding the dangling reference
        entity: &'static str,
        /// Id of the record holding the dangling reference
        id: i64,
        /// Name of the referencing field
        field: &'static str,
        /// The id that could not be resolved
        missing: i64,
    },

    /// No user with the given name exists.
    #[error("User not found: {name}")]
    UnknownUser {
        /// Name as typed
        name: String,
    },

    /// No category with the given title exists.
    #[error("Category not found: {title}")]
    UnknownCategory {
        /// Title as typed
        title: String,
    },

    /// Failure while writing formatted output.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Serenity/Poise framework error.
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrity_violation_names_the_record() {
        let err = Error::IntegrityViolation {
            entity: "product",
            id: 7,
            field: "category_id",
            missing: 42,
        };
        assert_eq!(
            err.to_string(),
            "Integrity violation: product 7 has category_id = 42, which does not exist"
        );
    }

    #[test]
    fn test_duplicate_id_message() {
        let err = Error::DuplicateId {
            entity: "user",
            id: 3,
        };
        assert_eq!(err.to_string(), "Duplicate user id 3");
    }
}
