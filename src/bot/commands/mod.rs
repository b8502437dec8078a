//! Discord command implementations organized by category.

/// Filter controls and the product table
pub mod filter;

/// General utility commands
pub mod general;

// Export commands
pub use filter::*;
pub use general::*;
