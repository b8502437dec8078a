//! Bot layer - Discord-specific interface and command handlers
//!
//! Each channel is an independent view of the catalog with its own filter
//! controls. Commands map one-to-one onto those controls.

/// Discord command implementations (filters, general)
pub mod commands;
/// Framework setup and client startup
pub mod framework;
/// Discord interaction handlers (autocomplete, etc.)
pub mod handlers;
/// Per-channel filter criteria
pub mod session;

use crate::core::catalog::Catalog;
use session::SessionStore;
use std::sync::Arc;

/// Shared data available to all bot commands.
/// The catalog is read-only; the session store holds the current criteria
/// for each channel.
pub struct BotData {
    /// Validated reference data
    pub catalog: Arc<Catalog>,
    /// Current filter criteria per channel
    pub sessions: SessionStore,
}

impl BotData {
    /// Creates a new `BotData` instance around the validated catalog, with no
    /// channel sessions yet.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: SessionStore::default(),
        }
    }
}

pub use commands::*;
pub use handlers::*;
