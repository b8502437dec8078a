//! Entity module - Contains the reference data records and the derived joined row.
//! Users own categories, categories group products. An [`EnrichedProduct`] is the
//! product joined with both of them for display.

pub mod category;
pub mod product;
pub mod user;

pub use category::Category;
pub use product::{EnrichedProduct, Product};
pub use user::{Sex, User};
