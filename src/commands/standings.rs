use anyhow::Result;
use serenity::all::{
    Colour, CommandInteraction, Context, CreateCommand, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};
use tracing::error;

use crate::bot::{db_id, Bot};
use crate::db::models::standings::StandingRow;
use crate::interactions::responses::{ephemeral, ephemeral_followup};

pub const NAME: &str = "standings";
pub const FETCH_FAILED: &str = "Sorry, something went wrong fetching the standings.";
/// Discord rejects embeds with more fields than this.
const MAX_EMBED_FIELDS: usize = 25;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("List the current standings of each coach.")
}

/// `(name, value)` pairs for the standings embed, in standings order.
pub fn standings_fields(rows: &[StandingRow]) -> Vec<(String, String)> {
    rows.iter()
        .take(MAX_EMBED_FIELDS)
        .enumerate()
        .map(|(idx, row)| {
            let username = if row.username.trim().is_empty() {
                "Unknown Coach"
            } else {
                row.username.as_str()
            };
            let team = row.team_name.as_deref().unwrap_or("Unknown Team");
            (
                format!("{}. {} {}", idx + 1, username, team),
                format!("Wins: {}, Losses: {}, Ties: {}", row.wins, row.losses, row.ties),
            )
        })
        .collect()
}

pub async fn run(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    // Admins post publicly; everyone else gets an ephemeral reply.
    let admin = bot.league.is_admin(db_id(command.user.id)).await?;

    let rows = match bot.league.standings().await {
        Ok(rows) => rows,
        Err(e) => {
            error!("Error generating standings: {}", e);
            if command.create_response(&ctx.http, ephemeral(FETCH_FAILED)).await.is_err() {
                command
                    .create_followup(&ctx.http, ephemeral_followup(FETCH_FAILED))
                    .await?;
            }
            return Ok(());
        }
    };

    let embed = standings_fields(&rows).into_iter().fold(
        CreateEmbed::new()
            .title("Current Standings")
            .description("Here are the current standings of all coaches:")
            .colour(Colour::BLUE),
        |embed, (name, value)| embed.field(name, value, false),
    );

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(!admin),
            ),
        )
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(username: &str, team: Option<&str>, wins: i64, losses: i64, ties: i64) -> StandingRow {
        StandingRow {
            discord_id: 1,
            username: username.to_string(),
            team_name: team.map(str::to_string),
            wins,
            losses,
            ties,
        }
    }

    #[test]
    fn fields_are_numbered_in_order() {
        let fields = standings_fields(&[
            row("ethan", Some("Auburn"), 5, 1, 0),
            row("sam", Some("Georgia"), 4, 2, 1),
        ]);

        assert_eq!(
            fields,
            vec![
                ("1. ethan Auburn".to_string(), "Wins: 5, Losses: 1, Ties: 0".to_string()),
                ("2. sam Georgia".to_string(), "Wins: 4, Losses: 2, Ties: 1".to_string()),
            ]
        );
    }

    #[test]
    fn missing_names_fall_back() {
        let fields = standings_fields(&[row(" ", None, 0, 0, 0)]);
        assert_eq!(fields[0].0, "1. Unknown Coach Unknown Team");
    }

    #[test]
    fn fields_are_capped_for_discord() {
        let rows: Vec<StandingRow> = (0..30).map(|i| row(&format!("coach{i}"), None, 0, 0, 0)).collect();
        assert_eq!(standings_fields(&rows).len(), 25);
    }
}
