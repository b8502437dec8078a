//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions come straight from the in-memory catalog, so they always match
//! what the filter commands can resolve.

use crate::{bot::BotData, errors::Error};

/// Provides autocomplete suggestions for user names.
///
/// # Arguments
/// * `ctx` - The poise context holding the catalog
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// Up to 25 matching user names, sorted alphabetically
pub async fn autocomplete_user_name(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    ctx.data().catalog.user_names_matching(partial)
}

/// Provides autocomplete suggestions for category titles.
///
/// # Arguments
/// * `ctx` - The poise context holding the catalog
/// * `partial` - The partial string the user has typed so far
///
/// # Returns
/// Up to 25 matching category titles, sorted alphabetically
pub async fn autocomplete_category_title(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    ctx.data().catalog.category_titles_matching(partial)
}
