//! Filter Discord commands - the product table and its controls.
//!
//! Every command here maps onto one control of the product view: the user
//! selector, the category toggles, the search box and the reset action. Each
//! one updates the channel's criteria and replies with the refreshed table.

use crate::{
    core::{
        catalog::Catalog,
        filter::FilterCriteria,
        table::{
            NO_MATCHING_MESSAGE, build_rows, describe_criteria, render_table, truncate_chars,
        },
    },
    errors::{Error, Result},
};
use std::fmt::Write;

/// Discord message length limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Builds the reply for the given criteria: a summary line followed by the
/// product table, or by the no-match message when nothing matches.
///
/// Rows are dropped from the end until the reply fits in a Discord message.
/// A reply that still does not fit with a single row, or a no-match reply with
/// an oversized summary, is cut to [`MESSAGE_LIMIT`] characters.
///
/// # Errors
/// Returns an error if the filter pass fails or formatting fails.
pub fn render_reply(catalog: &Catalog, criteria: &FilterCriteria) -> Result<String> {
    let items = catalog.visible_products(criteria)?;
    let summary = describe_criteria(catalog, criteria);

    if items.is_empty() {
        return Ok(fit_message(&format!("{summary}\n{NO_MATCHING_MESSAGE}")));
    }

    let rows = build_rows(&items);
    let mut shown = rows.len();
    loop {
        let table = render_table(&rows[..shown])?;
        let mut reply = format!("{summary}\n```\n{table}```");
        if shown < rows.len() {
            write!(&mut reply, "\n…and {} more", rows.len() - shown)?;
        }
        if reply.chars().count() <= MESSAGE_LIMIT {
            return Ok(reply);
        }
        if shown == 1 {
            // Keep the closing fence so the cut row still renders as code.
            let overhead = reply.chars().count() - table.chars().count();
            let cut = truncate_chars(table.trim_end(), MESSAGE_LIMIT.saturating_sub(overhead + 1));
            let reply = reply.replacen(&table, &format!("{cut}\n"), 1);
            return Ok(fit_message(&reply));
        }
        shown -= 1;
    }
}

fn fit_message(text: &str) -> String {
    truncate_chars(text, MESSAGE_LIMIT)
}

/// Resolves a typed user name into a user id; `None` selects all users.
///
/// # Errors
/// Returns [`Error::UnknownUser`] if no user has that name.
pub fn resolve_user(catalog: &Catalog, name: Option<&str>) -> Result<Option<i64>> {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Ok(None);
    };
    catalog
        .user_by_name(name)
        .map(|u| Some(u.id))
        .ok_or_else(|| Error::UnknownUser {
            name: name.trim().to_string(),
        })
}

/// Resolves a typed category title into a category id.
///
/// # Errors
/// Returns [`Error::UnknownCategory`] if no category has that title.
pub fn resolve_category(catalog: &Catalog, title: &str) -> Result<i64> {
    catalog
        .category_by_title(title)
        .map(|c| c.id)
        .ok_or_else(|| Error::UnknownCategory {
            title: title.trim().to_string(),
        })
}

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use super::{render_reply, resolve_category, resolve_user};
    use crate::{
        bot::{BotData, handlers::autocomplete},
        core::filter::FilterCriteria,
        errors::{Error, Result},
    };

    /// Shows the products matching this channel's filters.
    #[poise::command(slash_command, prefix_command)]
    pub async fn products(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let channel_id = ctx.channel_id().get();
        let criteria = ctx.data().sessions.criteria(channel_id).await;
        reply_with_table(ctx, &criteria).await
    }

    /// Shows only products in categories owned by the given user.
    ///
    /// Omitting the name selects all users.
    #[poise::command(slash_command, prefix_command)]
    pub async fn user(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Owner to filter by (omit for all users)"]
        #[autocomplete = "autocomplete::autocomplete_user_name"]
        name: Option<String>,
    ) -> Result<()> {
        let user_id = match resolve_user(&ctx.data().catalog, name.as_deref()) {
            Ok(user_id) => user_id,
            Err(e @ Error::UnknownUser { .. }) => {
                tracing::warn!("{e}");
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let channel_id = ctx.channel_id().get();
        let criteria = ctx
            .data()
            .sessions
            .update(channel_id, |c| c.with_user(user_id))
            .await;
        reply_with_table(ctx, &criteria).await
    }

    /// Parent command for the category selection.
    #[poise::command(
        slash_command,
        prefix_command,
        subcommands("category_toggle", "category_all")
    )]
    pub async fn category(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "Category selection. Available subcommands:\n\
            `/category toggle <title>` - Add or remove a category\n\
            `/category all` - Clear the selection";

        ctx.say(help_text).await?;
        Ok(())
    }

    /// Adds a category to the selection, or removes it if already selected.
    #[poise::command(slash_command, prefix_command, rename = "toggle")]
    pub async fn category_toggle(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Category title"]
        #[autocomplete = "autocomplete::autocomplete_category_title"]
        title: String,
    ) -> Result<()> {
        let category_id = match resolve_category(&ctx.data().catalog, &title) {
            Ok(id) => id,
            Err(e @ Error::UnknownCategory { .. }) => {
                tracing::warn!("{e}");
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let channel_id = ctx.channel_id().get();
        let criteria = ctx
            .data()
            .sessions
            .update(channel_id, |c| c.toggle_category(category_id))
            .await;
        reply_with_table(ctx, &criteria).await
    }

    /// Clears the category selection.
    #[poise::command(slash_command, prefix_command, rename = "all")]
    pub async fn category_all(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let channel_id = ctx.channel_id().get();
        let criteria = ctx
            .data()
            .sessions
            .update(channel_id, FilterCriteria::with_all_categories)
            .await;
        reply_with_table(ctx, &criteria).await
    }

    /// Keeps products whose category title contains the text (case-insensitive).
    #[poise::command(slash_command, prefix_command)]
    pub async fn search(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Text to look for in category titles"]
        #[rest]
        text: String,
    ) -> Result<()> {
        let channel_id = ctx.channel_id().get();
        let criteria = ctx
            .data()
            .sessions
            .update(channel_id, |c| c.with_query(&text))
            .await;
        reply_with_table(ctx, &criteria).await
    }

    /// Clears the search text.
    #[poise::command(slash_command, prefix_command)]
    pub async fn clear_search(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let channel_id = ctx.channel_id().get();
        let criteria = ctx
            .data()
            .sessions
            .update(channel_id, FilterCriteria::clear_query)
            .await;
        reply_with_table(ctx, &criteria).await
    }

    /// Resets all filters for this channel.
    #[poise::command(slash_command, prefix_command)]
    pub async fn reset(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let channel_id = ctx.channel_id().get();
        let criteria = ctx
            .data()
            .sessions
            .update(channel_id, |_| FilterCriteria::reset())
            .await;
        reply_with_table(ctx, &criteria).await
    }

    /// Sends the table for `criteria` to the invoking channel.
    async fn reply_with_table(
        ctx: poise::Context<'_, BotData, Error>,
        criteria: &FilterCriteria,
    ) -> Result<()> {
        let reply = render_reply(&ctx.data().catalog, criteria)?;
        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::{MESSAGE_LIMIT, render_reply, resolve_category, resolve_user};
    use crate::{
        core::{catalog::Catalog, filter::FilterCriteria, table::NO_MATCHING_MESSAGE},
        errors::Error,
        test_utils::{Sex, category, product, sample_catalog, user},
    };

    #[test]
    fn test_reply_contains_summary_and_table() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::default().with_query("drink");

        let reply = render_reply(&catalog, &criteria).unwrap();
        let mut lines = reply.lines();

        assert_eq!(lines.next(), Some("Filters: Search: \"drink\""));
        assert_eq!(lines.next(), Some("```"));
        assert!(reply.contains("Milk"));
        assert!(reply.contains("Beer"));
        assert!(!reply.contains("Apple"));
        assert!(reply.ends_with("```"));
    }

    #[test]
    fn test_reply_shows_no_match_message() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::default().with_query("veg");

        let reply = render_reply(&catalog, &criteria).unwrap();
        assert_eq!(
            reply,
            format!("Filters: Search: \"veg\"\n{NO_MATCHING_MESSAGE}")
        );
    }

    #[test]
    fn test_reply_is_truncated_to_message_limit() {
        let users = vec![user(1, "Max", Sex::Male)];
        let categories = vec![category(1, "Fruits", "🍎", 1)];
        let products = (1..=200)
            .map(|id| product(id, &format!("Product number {id}"), 1))
            .collect();
        let catalog = Catalog::new(users, categories, products).unwrap();

        let reply = render_reply(&catalog, &FilterCriteria::default()).unwrap();
        assert!(reply.chars().count() <= MESSAGE_LIMIT);
        assert!(reply.contains("more"));
        assert!(reply.contains("Product number 1 "));
    }

    #[test]
    fn test_long_search_without_hits_fits_message() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::default().with_query(&"x".repeat(2100));

        let reply = render_reply(&catalog, &criteria).unwrap();
        assert!(reply.chars().count() <= MESSAGE_LIMIT);
        assert!(reply.ends_with(NO_MATCHING_MESSAGE));
    }

    #[test]
    fn test_single_oversized_row_fits_message() {
        let users = vec![user(1, "Max", Sex::Male)];
        let categories = vec![category(1, "Fruits", "🍎", 1)];
        let products = vec![product(1, &"Apple".repeat(500), 1)];
        let catalog = Catalog::new(users, categories, products).unwrap();

        let reply = render_reply(&catalog, &FilterCriteria::default()).unwrap();
        assert!(reply.chars().count() <= MESSAGE_LIMIT);
        assert!(reply.starts_with("Filters: All\n```\n"));
        assert!(reply.ends_with("…\n```"));
    }

    #[test]
    fn test_select_user_then_reset_restores_full_list() {
        let catalog = sample_catalog();
        let full = render_reply(&catalog, &FilterCriteria::default()).unwrap();

        let user_id = resolve_user(&catalog, Some("Max")).unwrap();
        let filtered = FilterCriteria::default().with_user(user_id);
        assert_ne!(render_reply(&catalog, &filtered).unwrap(), full);

        let reset = FilterCriteria::reset();
        assert_eq!(render_reply(&catalog, &reset).unwrap(), full);
    }

    #[test]
    fn test_resolve_user() {
        let catalog = sample_catalog();

        assert_eq!(resolve_user(&catalog, None).unwrap(), None);
        assert_eq!(resolve_user(&catalog, Some("  ")).unwrap(), None);
        assert_eq!(resolve_user(&catalog, Some("anna")).unwrap(), Some(2));
        assert!(matches!(
            resolve_user(&catalog, Some("Nobody")),
            Err(Error::UnknownUser { ref name }) if name == "Nobody"
        ));
    }

    #[test]
    fn test_resolve_category() {
        let catalog = sample_catalog();

        assert_eq!(resolve_category(&catalog, "Drinks").unwrap(), 3);
        assert!(matches!(
            resolve_category(&catalog, "Veg"),
            Err(Error::UnknownCategory { ref title }) if title == "Veg"
        ));
    }
}
