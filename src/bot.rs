use async_trait::async_trait;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, EventHandler, GuildId, Interaction, Message,
    ModalInteraction, Ready, UserId,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::commands;
use crate::commands::log_game;
use crate::config::Config;
use crate::db::models::teams::Team;
use crate::interactions::custom_id::CustomId;
use crate::interactions::responses::{ephemeral, ephemeral_followup, GENERIC_ERROR};
use crate::league::League;

/// Discord ids are snowflakes below 2^63, stored as BIGINT.
pub fn db_id(user: UserId) -> i64 {
    user.get() as i64
}

/// Event handler for the league guild. Holds everything the commands need.
pub struct Bot {
    pub league: League,
    /// Team list for opponent autocomplete, loaded once the gateway is ready.
    pub team_cache: RwLock<Vec<Team>>,
    pub confirm_timeout_secs: u64,
    guild_id: GuildId,
    command_prefix: String,
}

impl Bot {
    pub fn new(league: League, app_config: &Config) -> Self {
        info!("Bot configured for guild ID: {}", app_config.guild_id);
        info!("Prefix commands use: {}", app_config.command_prefix);

        Self {
            league,
            team_cache: RwLock::new(Vec::new()),
            confirm_timeout_secs: app_config.confirm_timeout_secs,
            guild_id: GuildId::new(app_config.guild_id),
            command_prefix: app_config.command_prefix.clone(),
        }
    }

    async fn refresh_team_cache(&self) {
        match self.league.teams().await {
            Ok(teams) => {
                info!("Loaded {} teams for autocomplete", teams.len());
                *self.team_cache.write().await = teams;
            }
            Err(e) => error!("Failed to load teams for autocomplete: {}", e),
        }
    }

    async fn handle_command(&self, ctx: &Context, command: &CommandInteraction) {
        debug!(command = %command.data.name, user = %command.user.id, "Received slash command");
        if let Err(e) = commands::dispatch(self, ctx, command).await {
            error!(command = %command.data.name, error = ?e, "Slash command failed");
            if command.create_response(&ctx.http, ephemeral(GENERIC_ERROR)).await.is_err() {
                // The initial response was already sent; fall back to a followup.
                if let Err(e) = command
                    .create_followup(&ctx.http, ephemeral_followup(GENERIC_ERROR))
                    .await
                {
                    warn!("Failed to send command failure notice: {}", e);
                }
            }
        }
    }

    async fn handle_autocomplete(&self, ctx: &Context, command: &CommandInteraction) {
        if command.data.name != log_game::NAME {
            return;
        }
        if let Err(e) = log_game::autocomplete(self, ctx, command).await {
            warn!(error = ?e, "Autocomplete response failed");
        }
    }

    async fn handle_component(&self, ctx: &Context, component: &ComponentInteraction) {
        match CustomId::parse(&component.data.custom_id) {
            Ok(CustomId::ConfirmEdit {
                action,
                user_id,
                opponent_id,
                issued_unix,
            }) => {
                if let Err(e) = log_game::on_confirm_edit(
                    self,
                    ctx,
                    component,
                    action,
                    user_id,
                    opponent_id,
                    issued_unix,
                )
                .await
                {
                    error!(error = ?e, "Confirm-edit button failed");
                    if let Err(e) = component.create_response(&ctx.http, ephemeral(GENERIC_ERROR)).await {
                        warn!("Failed to send button failure notice: {}", e);
                    }
                }
            }
            Ok(other) => warn!(custom_id = ?other, "Component id does not belong to a button"),
            Err(e) => warn!(error = %e, "Ignoring component interaction"),
        }
    }

    async fn handle_modal(&self, ctx: &Context, modal: &ModalInteraction) {
        match CustomId::parse(&modal.data.custom_id) {
            Ok(CustomId::ReportModal { opponent_id }) => {
                log_game::on_report_submit(self, ctx, modal, opponent_id).await;
            }
            Ok(other) => warn!(custom_id = ?other, "Component id does not belong to a modal"),
            Err(e) => warn!(error = %e, "Ignoring modal submission"),
        }
    }
}

#[async_trait]
impl EventHandler for Bot {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("✅ Logged in as {} (ID: {})", ready.user.name, ready.user.id);

        self.refresh_team_cache().await;

        info!("Syncing commands to the guild...");
        match self.guild_id.set_commands(&ctx.http, commands::all()).await {
            Ok(registered) => info!("Commands synced successfully ({} commands).", registered.len()),
            Err(e) => error!("Failed to sync commands to guild {}: {}", self.guild_id, e),
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if msg.content.trim() == format!("{}ping", self.command_prefix) {
            if let Err(e) = msg.channel_id.say(&ctx.http, "🏓 Pong!").await {
                warn!("Failed to answer ping: {}", e);
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => self.handle_command(&ctx, &command).await,
            Interaction::Autocomplete(command) => self.handle_autocomplete(&ctx, &command).await,
            Interaction::Component(component) => self.handle_component(&ctx, &component).await,
            Interaction::Modal(modal) => self.handle_modal(&ctx, &modal).await,
            _ => {}
        }
    }
}
