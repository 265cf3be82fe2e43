use anyhow::Result;
use chrono::Utc;
use serenity::all::{
    ActionRowComponent, ButtonStyle, CommandInteraction, CommandOptionType, ComponentInteraction,
    Context, CreateActionRow, CreateAutocompleteResponse, CreateButton, CreateCommand,
    CreateCommandOption, CreateInputText, CreateInteractionResponse, CreateInteractionResponseMessage,
    CreateModal, InputTextStyle, ModalInteraction,
};
use tracing::{error, info, warn};

use crate::bot::{db_id, Bot};
use crate::callbacks::announcements;
use crate::commands::guards::require_coach;
use crate::db::models::game_results::GameResult;
use crate::db::models::teams::Team;
use crate::db::models::weeks::Week;
use crate::error::InputError;
use crate::interactions::custom_id::{is_expired, CustomId, EditAction};
use crate::interactions::responses::{ephemeral, ephemeral_followup, public};
use crate::reports::game_report::GameReport;

pub const NAME: &str = "loggame";
pub const BYE: &str = "BYE";
const MAX_CHOICES: usize = 25;

const USER_SCORE_FIELD: &str = "user_score";
const OPPONENT_SCORE_FIELD: &str = "opp_score";
const NOTES_FIELD: &str = "notes";

pub const NO_ACTIVE_WEEK: &str = "No active week is set. Please contact an admin.";
pub const ALREADY_PLAYED: &str = "Oops! You have already played that team this season! \
     If you believe this is a mistake, contact a commissioner.";
pub const USER_GAME_LOCKED: &str = "Oops! A user game has already been logged for this week! \
     Please contact a commissioner to make a fix!";
pub const ALREADY_LOGGED: &str = "Game already logged for this week! Would you like to edit?";
pub const NOT_YOUR_BUTTON: &str = "This button isn't for you.";
pub const PROMPT_EXPIRED: &str = "This prompt has expired. Run /loggame again.";
pub const KEEPING_EXISTING: &str = "Okay, keeping the existing game for this week.";
pub const SAVE_FAILED: &str = "Sorry, something went wrong saving your report.";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Log your game or a bye week.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "opponent",
                "Search and select your opponent (type to autocomplete)",
            )
            .required(true)
            .set_autocomplete(true),
        )
}

/// Entry point for logging a game or bye week.
pub async fn run(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    if !require_coach(bot, ctx, command).await? {
        return Ok(());
    }

    let coach = db_id(command.user.id);
    let opponent = command
        .data
        .options
        .iter()
        .find(|o| o.name == "opponent")
        .and_then(|o| o.value.as_str())
        .unwrap_or_default();

    let Some(week) = bot.league.active_week().await? else {
        command.create_response(&ctx.http, ephemeral(NO_ACTIVE_WEEK)).await?;
        return Ok(());
    };

    if opponent == BYE {
        let response = log_bye(bot, coach, &week).await?;
        command.create_response(&ctx.http, response).await?;
        announcements::announce_auto_advance(&bot.league, &ctx.http, command.channel_id).await;
        return Ok(());
    }

    let opponent_id = match parse_opponent(opponent) {
        Ok(id) => id,
        Err(e) => {
            command.create_response(&ctx.http, ephemeral(e.to_string())).await?;
            return Ok(());
        }
    };

    // Prevent playing the same team twice in the same season.
    if bot.league.has_played_opponent(coach, &week, opponent_id).await? {
        command.create_response(&ctx.http, ephemeral(ALREADY_PLAYED)).await?;
        return Ok(());
    }

    let response = match bot.league.game(coach, &week).await? {
        None => CreateInteractionResponse::Modal(report_modal(opponent_id, None)),
        Some(existing) if is_locked(Some(&existing)) => ephemeral(USER_GAME_LOCKED),
        Some(_) => {
            let issued_unix = Utc::now().timestamp();
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(ALREADY_LOGGED)
                    .ephemeral(true)
                    .components(vec![confirm_buttons(command.user.id.get(), opponent_id, issued_unix)]),
            )
        }
    };
    command.create_response(&ctx.http, response).await?;
    Ok(())
}

/// Autocomplete for the `opponent` option.
pub async fn autocomplete(bot: &Bot, ctx: &Context, command: &CommandInteraction) -> Result<()> {
    let current = command
        .data
        .autocomplete()
        .map(|focused| focused.value.to_string())
        .unwrap_or_default();

    let choices = {
        let teams = bot.team_cache.read().await;
        team_choices(&teams, &current)
    };

    let response = choices
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |resp, (name, value)| {
            resp.add_string_choice(name, value)
        });
    command
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await?;
    Ok(())
}

/// Case-insensitive substring match over team names, sorted, capped at 25.
/// With no input yet, `BYE` leads the list.
pub fn team_choices(teams: &[Team], current: &str) -> Vec<(String, String)> {
    let needle = current.trim().to_lowercase();
    let mut matches: Vec<&Team> = teams
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by(|a, b| a.name.cmp(&b.name));

    let mut choices = Vec::with_capacity(MAX_CHOICES);
    if needle.is_empty() {
        choices.push((BYE.to_string(), BYE.to_string()));
    }
    let room = MAX_CHOICES - choices.len();
    choices.extend(
        matches
            .into_iter()
            .take(room)
            .map(|t| (t.name.clone(), t.team_id.to_string())),
    );
    choices
}

pub fn parse_opponent(raw: &str) -> Result<i32, InputError> {
    raw.trim()
        .parse()
        .map_err(|_| InputError::InvalidOpponent(raw.to_string()))
}

/// Score/notes modal, prefilled from `existing` when editing.
pub fn report_modal(opponent_id: i32, existing: Option<&GameResult>) -> CreateModal {
    let mut user_score = CreateInputText::new(InputTextStyle::Short, "Your Score", USER_SCORE_FIELD)
        .placeholder("e.g. 24")
        .required(true)
        .max_length(3);
    let mut opponent_score =
        CreateInputText::new(InputTextStyle::Short, "Opponent Score", OPPONENT_SCORE_FIELD)
            .placeholder("e.g. 17")
            .required(true)
            .max_length(3);
    let mut notes = CreateInputText::new(InputTextStyle::Paragraph, "Notes (optional)", NOTES_FIELD)
        .required(false)
        .max_length(200);

    if let Some(existing) = existing {
        if let Some(score) = existing.user_score {
            user_score = user_score.value(score.to_string());
        }
        if let Some(score) = existing.opponent_score {
            opponent_score = opponent_score.value(score.to_string());
        }
        if let Some(existing_notes) = existing.notes.as_deref().filter(|n| !n.is_empty()) {
            notes = notes.value(existing_notes);
        }
    }

    CreateModal::new(CustomId::ReportModal { opponent_id }.encode(), "Game Report").components(vec![
        CreateActionRow::InputText(user_score),
        CreateActionRow::InputText(opponent_score),
        CreateActionRow::InputText(notes),
    ])
}

fn confirm_buttons(user_id: u64, opponent_id: i32, issued_unix: i64) -> CreateActionRow {
    let id = |action| {
        CustomId::ConfirmEdit {
            action,
            user_id,
            opponent_id,
            issued_unix,
        }
        .encode()
    };
    CreateActionRow::Buttons(vec![
        CreateButton::new(id(EditAction::Yes))
            .label("Yes")
            .style(ButtonStyle::Primary),
        CreateButton::new(id(EditAction::No))
            .label("No")
            .style(ButtonStyle::Secondary),
        CreateButton::new(id(EditAction::Bye))
            .label("Bye")
            .style(ButtonStyle::Secondary),
    ])
}

/// A logged user game can only be changed by a commissioner.
pub fn is_locked(existing: Option<&GameResult>) -> bool {
    existing.is_some_and(|game| game.user_game)
}

/// Records a bye for the week unless a user game already occupies it.
async fn log_bye(bot: &Bot, coach: i64, week: &Week) -> Result<CreateInteractionResponse> {
    if is_locked(bot.league.game(coach, week).await?.as_ref()) {
        return Ok(ephemeral(USER_GAME_LOCKED));
    }

    let report = GameReport::Bye;
    bot.league.record(report.try_map_to_db(coach, week)).await?;
    info!(coach, year = week.year, week = week.week_num, "Logged bye week");
    Ok(public(report.summary("")))
}

/// Handles the Yes / No / Bye buttons shown when a game is already logged.
pub async fn on_confirm_edit(
    bot: &Bot,
    ctx: &Context,
    component: &ComponentInteraction,
    action: EditAction,
    user_id: u64,
    opponent_id: i32,
    issued_unix: i64,
) -> Result<()> {
    if component.user.id.get() != user_id {
        component.create_response(&ctx.http, ephemeral(NOT_YOUR_BUTTON)).await?;
        return Ok(());
    }
    if is_expired(issued_unix, Utc::now().timestamp(), bot.confirm_timeout_secs) {
        component.create_response(&ctx.http, ephemeral(PROMPT_EXPIRED)).await?;
        return Ok(());
    }

    let coach = db_id(component.user.id);
    let Some(week) = bot.league.active_week().await? else {
        component.create_response(&ctx.http, ephemeral(NO_ACTIVE_WEEK)).await?;
        return Ok(());
    };

    match action {
        EditAction::Yes => {
            let existing = bot.league.game(coach, &week).await?;
            // A user game may have been logged since these buttons were sent.
            if is_locked(existing.as_ref()) {
                component.create_response(&ctx.http, ephemeral(USER_GAME_LOCKED)).await?;
                return Ok(());
            }
            let modal = report_modal(opponent_id, existing.as_ref());
            component
                .create_response(&ctx.http, CreateInteractionResponse::Modal(modal))
                .await?;
        }
        EditAction::No => {
            component
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::UpdateMessage(
                        CreateInteractionResponseMessage::new()
                            .content(KEEPING_EXISTING)
                            .components(Vec::new()),
                    ),
                )
                .await?;
        }
        EditAction::Bye => {
            let response = log_bye(bot, coach, &week).await?;
            component.create_response(&ctx.http, response).await?;
            announcements::announce_auto_advance(&bot.league, &ctx.http, component.channel_id).await;
        }
    }
    Ok(())
}

/// Saves a submitted report modal. Never propagates errors: the coach gets an apology instead.
pub async fn on_report_submit(bot: &Bot, ctx: &Context, modal: &ModalInteraction, opponent_id: i32) {
    match save_report(bot, ctx, modal, opponent_id).await {
        Ok(true) => {
            // After recording, check if all users have reported and advance automatically.
            announcements::announce_auto_advance(&bot.league, &ctx.http, modal.channel_id).await;
        }
        Ok(false) => {}
        Err(e) => {
            error!(user = %modal.user.id, opponent_id, error = ?e, "Failed to save game report");
            if modal.create_response(&ctx.http, ephemeral(SAVE_FAILED)).await.is_err() {
                if let Err(e) = modal.create_followup(&ctx.http, ephemeral_followup(SAVE_FAILED)).await {
                    warn!("Failed to send report failure notice: {}", e);
                }
            }
        }
    }
}

/// Returns `true` once a result was stored.
async fn save_report(bot: &Bot, ctx: &Context, modal: &ModalInteraction, opponent_id: i32) -> Result<bool> {
    let coach = db_id(modal.user.id);
    let user_game = bot.league.controls_team(opponent_id).await?;

    let report = match GameReport::from_fields(
        opponent_id,
        modal_value(modal, USER_SCORE_FIELD),
        modal_value(modal, OPPONENT_SCORE_FIELD),
        modal_value(modal, NOTES_FIELD),
        user_game,
    ) {
        Ok(report) => report,
        Err(e) => {
            modal.create_response(&ctx.http, ephemeral(e.to_string())).await?;
            return Ok(false);
        }
    };

    let Some(week) = bot.league.active_week().await? else {
        modal.create_response(&ctx.http, ephemeral(NO_ACTIVE_WEEK)).await?;
        return Ok(false);
    };
    if is_locked(bot.league.game(coach, &week).await?.as_ref()) {
        modal.create_response(&ctx.http, ephemeral(USER_GAME_LOCKED)).await?;
        return Ok(false);
    }

    let stored = bot.league.record(report.try_map_to_db(coach, &week)).await?;
    info!(
        coach,
        opponent_id,
        year = stored.year,
        week = stored.week_num,
        user_game,
        "Recorded game report"
    );

    let team_name = bot
        .league
        .team(opponent_id)
        .await?
        .map(|t| t.name)
        .unwrap_or_else(|| "Unknown Team".to_string());

    // Send the confirmation to the channel so everyone can see it.
    modal
        .create_response(&ctx.http, public(report.summary(&team_name)))
        .await?;
    Ok(true)
}

fn modal_value<'a>(modal: &'a ModalInteraction, field: &str) -> Option<&'a str> {
    modal
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == field => input.value.as_deref(),
            _ => None,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(names: &[&str]) -> Vec<Team> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Team {
                team_id: i as i32 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn blank_query_puts_bye_first() {
        let choices = team_choices(&teams(&["Texas", "Auburn", "Georgia"]), "  ");

        assert_eq!(choices[0], ("BYE".to_string(), "BYE".to_string()));
        let names: Vec<&str> = choices[1..].iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Auburn", "Georgia", "Texas"]);
    }

    #[test]
    fn query_filters_case_insensitively_without_bye() {
        let choices = team_choices(&teams(&["Texas", "Texas A&M", "Auburn", "North Texas"]), "TEX");

        let names: Vec<&str> = choices.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["North Texas", "Texas", "Texas A&M"]);
        assert!(choices.iter().all(|(n, _)| n != BYE));
    }

    #[test]
    fn choice_value_is_team_id() {
        let choices = team_choices(&teams(&["Auburn"]), "aub");
        assert_eq!(choices, vec![("Auburn".to_string(), "1".to_string())]);
    }

    #[test]
    fn choices_are_capped() {
        let names: Vec<String> = (0..40).map(|i| format!("Team {i:02}")).collect();
        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let all = teams(&name_refs);

        let blank = team_choices(&all, "");
        assert_eq!(blank.len(), 25);
        assert_eq!(blank[0].0, BYE);
        assert_eq!(blank[24].0, "Team 23");

        let typed = team_choices(&all, "team");
        assert_eq!(typed.len(), 25);
        assert_eq!(typed[24].0, "Team 24");
    }

    fn logged_game(user_game: bool, bye: bool) -> GameResult {
        GameResult {
            result_id: 1,
            discord_id: 100,
            year: 2026,
            week_num: 3,
            opponent_id: (!bye).then_some(9),
            user_score: (!bye).then_some(21),
            opponent_score: (!bye).then_some(14),
            user_win: (!bye).then_some(true),
            notes: None,
            user_game,
            bye,
            reported_at: Utc::now(),
        }
    }

    #[test]
    fn only_user_games_lock_the_week() {
        assert!(!is_locked(None));
        assert!(!is_locked(Some(&logged_game(false, false))));
        assert!(!is_locked(Some(&logged_game(false, true))));
        assert!(is_locked(Some(&logged_game(true, false))));
    }

    #[test]
    fn parse_opponent_accepts_ids_only() {
        assert_eq!(parse_opponent("17"), Ok(17));
        assert_eq!(
            parse_opponent("Auburn"),
            Err(InputError::InvalidOpponent("Auburn".to_string()))
        );
        assert_eq!(
            InputError::InvalidOpponent("x".to_string()).to_string(),
            "Invalid opponent selection."
        );
    }
}
