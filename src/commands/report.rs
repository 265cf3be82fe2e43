use anyhow::Result;
use serenity::all::{CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption};
use tracing::info;

use crate::interactions::responses::ephemeral;

pub const NAME: &str = "report";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Report your result or issue.")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "reason", "The details of your report.")
                .required(true),
        )
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<()> {
    let reason = command
        .data
        .options
        .iter()
        .find(|o| o.name == "reason")
        .and_then(|o| o.value.as_str())
        .unwrap_or_default();

    info!(user = %command.user.id, reason, "Report received");
    command
        .create_response(&ctx.http, ephemeral(format!("Report received: {}", reason)))
        .await?;
    Ok(())
}
