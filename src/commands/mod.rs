use anyhow::Result;
use serenity::all::{CommandInteraction, Context, CreateCommand};
use tracing::warn;

use crate::bot::Bot;

pub mod advance;
pub mod diagnostics;
pub mod guards;
pub mod log_game;
pub mod rank;
pub mod report;
pub mod standings;

/// Every slash command synced to the guild on startup.
pub fn all() -> Vec<CreateCommand> {
    vec![
        log_game::register(),
        report::register(),
        standings::register(),
        rank::register(),
        advance::register(),
        diagnostics::register_test(),
        diagnostics::register_list_users(),
    ]
}

pub async fn dispatch(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    match command.data.name.as_str() {
        log_game::NAME => log_game::run(bot, ctx, command).await,
        report::NAME => report::run(ctx, command).await,
        standings::NAME => standings::run(bot, ctx, command).await,
        rank::NAME => rank::run(bot, ctx, command).await,
        advance::NAME => advance::run(bot, ctx, command).await,
        diagnostics::TEST_NAME => diagnostics::run_test(bot, ctx, command).await,
        diagnostics::LIST_USERS_NAME => diagnostics::run_list_users(bot, ctx, command).await,
        other => {
            warn!(command = other, "Received unknown slash command");
            Ok(())
        }
    }
}
