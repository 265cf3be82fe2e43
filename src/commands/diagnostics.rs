use anyhow::Result;
use serenity::all::{CommandInteraction, Context, CreateCommand};
use tracing::warn;

use crate::bot::Bot;
use crate::commands::guards::require_admin;
use crate::db::models::users::User;
use crate::interactions::responses::{clamp_content, ephemeral};

pub const TEST_NAME: &str = "test";
pub const LIST_USERS_NAME: &str = "list_users";
pub const NO_USERS: &str = "No users found in the database.";

pub fn register_test() -> CreateCommand {
    CreateCommand::new(TEST_NAME).description("A test command to check if the / commands are working.")
}

pub fn register_list_users() -> CreateCommand {
    CreateCommand::new(LIST_USERS_NAME).description("List all users in the database.")
}

pub fn user_listing(users: &[User]) -> String {
    let lines: Vec<String> = users
        .iter()
        .map(|u| format!("{}: {}", u.discord_id, u.username))
        .collect();
    format!("Users:\n{}", lines.join("\n"))
}

pub async fn run_test(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    if !require_admin(bot, ctx, command).await? {
        return Ok(());
    }

    command
        .create_response(&ctx.http, ephemeral("Test command executed successfully!"))
        .await?;
    if let Err(e) = command
        .channel_id
        .say(&ctx.http, "This message is sent to the channel as a test.")
        .await
    {
        warn!("Test message could not be posted: {}", e);
    }
    Ok(())
}

pub async fn run_list_users(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    let users = bot.league.users().await?;
    let content = if users.is_empty() {
        NO_USERS.to_string()
    } else {
        clamp_content(user_listing(&users))
    };
    command.create_response(&ctx.http, ephemeral(content)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_shows_ids_and_names() {
        let users = vec![
            User {
                discord_id: 184467440737,
                username: "ethan".to_string(),
                admin: true,
                team_id: Some(1),
            },
            User {
                discord_id: 5,
                username: "sam".to_string(),
                admin: false,
                team_id: None,
            },
        ];
        assert_eq!(user_listing(&users), "Users:\n184467440737: ethan\n5: sam");
    }
}
