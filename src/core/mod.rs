//! Core business logic - framework-agnostic catalog, filtering and table operations.
//!
//! Nothing in here knows about Discord. The bot layer owns the current
//! [`FilterCriteria`](filter::FilterCriteria) for each channel and calls into
//! these modules to compute and format the visible products.

/// Validated reference data and lookups
pub mod catalog;
/// Join-and-filter pass and filter criteria transitions
pub mod filter;
/// Table rows and text rendering
pub mod table;
