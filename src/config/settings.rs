//! Settings module for reading runtime configuration from environment variables.
//!
//! Values normally come from the `.env` file loaded at startup. Only the bot
//! token is required; everything else has a default.

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Default location of the bundled reference data.
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

/// Runtime settings for the bot.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Discord bot token (`DISCORD_BOT_TOKEN`)
    pub token: String,
    /// Path of the catalog data file (`CATALOG_PATH`)
    pub catalog_path: PathBuf,
    /// Guild to register commands in during development (`DEV_GUILD_ID`)
    pub dev_guild_id: Option<u64>,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    /// Returns an error if `DISCORD_BOT_TOKEN` is missing or `DEV_GUILD_ID` is
    /// set but is not a number.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DISCORD_BOT_TOKEN")?;
        Self::from_parts(
            token,
            std::env::var("CATALOG_PATH").ok(),
            std::env::var("DEV_GUILD_ID").ok(),
        )
    }

    /// Builds settings from raw values, applying defaults.
    ///
    /// # Errors
    /// Returns an error if `dev_guild_id` is present but not a valid `u64`.
    pub fn from_parts(
        token: String,
        catalog_path: Option<String>,
        dev_guild_id: Option<String>,
    ) -> Result<Self> {
        let catalog_path = catalog_path
            .filter(|p| !p.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);

        let dev_guild_id = dev_guild_id
            .filter(|g| !g.trim().is_empty())
            .map(|g| {
                g.trim().parse::<u64>().map_err(|e| Error::Config {
                    message: format!("DEV_GUILD_ID must be a number: {e}"),
                })
            })
            .transpose()?;

        Ok(Self {
            token,
            catalog_path,
            dev_guild_id,
        })
    }
}
