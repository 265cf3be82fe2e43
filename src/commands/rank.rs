use anyhow::Result;
use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::bot::Bot;
use crate::commands::guards::require_admin;
use crate::db::models::users::CoachTeam;
use crate::interactions::responses::{clamp_content, ephemeral};

pub const NAME: &str = "rank";
pub const NO_USERS: &str = "No users found to rank.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("View and manage a ranking of all users (admin only).")
}

/// Numbered coach list; `coaches` arrive sorted by username.
pub fn rank_listing(coaches: &[CoachTeam]) -> String {
    let lines: Vec<String> = coaches
        .iter()
        .enumerate()
        .map(|(idx, coach)| {
            let team = coach
                .team_name
                .as_deref()
                .map(|name| format!(" (Team {})", name))
                .unwrap_or_default();
            format!("{}. {}{}", idx + 1, coach.username, team)
        })
        .collect();
    format!("🏅 **Current Coaches (for ranking):**\n{}", lines.join("\n"))
}

pub async fn run(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    if !require_admin(bot, ctx, command).await? {
        return Ok(());
    }

    let coaches = bot.league.coaches_with_teams().await?;
    let content = if coaches.is_empty() {
        NO_USERS.to_string()
    } else {
        clamp_content(rank_listing(&coaches))
    };
    command.create_response(&ctx.http, ephemeral(content)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_numbers_coaches_and_names_teams() {
        let coaches = vec![
            CoachTeam {
                discord_id: 10,
                username: "alex".to_string(),
                team_id: Some(3),
                team_name: Some("Oregon".to_string()),
            },
            CoachTeam {
                discord_id: 11,
                username: "blake".to_string(),
                team_id: None,
                team_name: None,
            },
        ];

        assert_eq!(
            rank_listing(&coaches),
            "🏅 **Current Coaches (for ranking):**\n1. alex (Team Oregon)\n2. blake"
        );
    }
}
