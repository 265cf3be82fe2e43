use anyhow::Result;
use serenity::all::{CommandInteraction, Context, CreateCommand};
use tracing::{info, warn};

use crate::bot::Bot;
use crate::commands::guards::require_admin;
use crate::db::models::weeks::Week;
use crate::interactions::responses::ephemeral;

pub const NAME: &str = "advance";
pub const NO_ACTIVE_WEEK: &str = "No active week found to advance.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Advance to the next week (admin only).")
}

pub fn advance_message(previous: &Week, current: &Week) -> String {
    format!(
        "Week advanced: {} Week {} ➜ {} Week {}",
        previous.year, previous.week_num, current.year, current.week_num
    )
}

pub async fn run(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    if !require_admin(bot, ctx, command).await? {
        return Ok(());
    }

    let Some(advancement) = bot.league.advance().await? else {
        command.create_response(&ctx.http, ephemeral(NO_ACTIVE_WEEK)).await?;
        return Ok(());
    };

    let msg = advance_message(&advancement.previous, &advancement.current);
    info!(admin = %command.user.id, "{}", msg);

    // Acknowledge to the admin ephemerally and announce to the channel.
    command.create_response(&ctx.http, ephemeral(msg.clone())).await?;
    if let Err(e) = command.channel_id.say(&ctx.http, format!("📅 {}", msg)).await {
        warn!("Could not announce week advance in channel: {}", e);
    }
    Ok(())
}
