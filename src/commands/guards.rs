use anyhow::Result;
use serenity::all::{CommandInteraction, Context};

use crate::bot::{db_id, Bot};
use crate::interactions::responses::ephemeral;

pub const NOT_A_COACH: &str = "You are not a coach! Please contact an admin.";
pub const NOT_AN_ADMIN: &str = "You are not an admin! Please contact an admin.";

/// Replies with a rejection and returns `false` unless the caller is a registered coach.
pub async fn require_coach(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<bool> {
    if bot.league.is_coach(db_id(command.user.id)).await? {
        return Ok(true);
    }
    command.create_response(&ctx.http, ephemeral(NOT_A_COACH)).await?;
    Ok(false)
}

/// Replies with a rejection and returns `false` unless the caller is a commissioner.
pub async fn require_admin(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<bool> {
    if bot.league.is_admin(db_id(command.user.id)).await? {
        return Ok(true);
    }
    command.create_response(&ctx.http, ephemeral(NOT_AN_ADMIN)).await?;
    Ok(false)
}
