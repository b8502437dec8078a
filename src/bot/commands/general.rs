//! General Discord commands - ping, help, and other utility commands.
//! These commands don't touch the catalog or the channel filters.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(slash_command, prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say("Pong!").await?;
        Ok(())
    }

    /// Displays help information about available commands.
    #[poise::command(slash_command, prefix_command)]
    pub async fn help(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let help_text = "**Product Categories Help**\n\
        Filters are kept per channel and combine with each other.\n\n\
        **Viewing**\n\
        • `/products` - Shows the products matching the current filters.\n\n\
        **Filters**\n\
        • `/user [name]` - Shows only categories owned by a user. Omit the name for all users.\n\
        • `/category toggle <title>` - Adds or removes a category from the selection.\n\
        • `/category all` - Clears the category selection.\n\
        • `/search <text>` - Keeps products whose category title contains the text.\n\
        • `/clear_search` - Clears the search text.\n\
        • `/reset` - Resets all filters.\n\n\
        **Utility Commands**\n\
        • `/ping` - Checks if the bot is responsive.\n\
        • `/help` - Shows this help message.";

        ctx.say(help_text).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
