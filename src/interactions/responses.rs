use serenity::all::{
    CreateInteractionResponse, CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
};

pub const GENERIC_ERROR: &str = "Sorry, something went wrong. Please try again.";

/// A reply only the invoking user can see.
pub fn ephemeral(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    )
}

/// A reply visible to the whole channel.
pub fn public(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(CreateInteractionResponseMessage::new().content(content))
}

/// Ephemeral follow-up, used once the initial response slot is spent.
pub fn ephemeral_followup(content: impl Into<String>) -> CreateInteractionResponseFollowup {
    CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true)
}

/// Discord's hard limit on message content length, in characters.
const MAX_CONTENT_CHARS: usize = 2000;

/// Cuts long listings down to a length Discord accepts, marking the cut with `…`.
pub fn clamp_content(content: String) -> String {
    if content.chars().count() <= MAX_CONTENT_CHARS {
        return content;
    }
    let mut clamped: String = content.chars().take(MAX_CONTENT_CHARS - 1).collect();
    clamped.push('…');
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_is_untouched() {
        assert_eq!(clamp_content("Users:\n1: ethan".to_string()), "Users:\n1: ethan");
    }

    #[test]
    fn long_content_is_cut_to_the_limit() {
        let clamped = clamp_content("🏈".repeat(2500));
        assert_eq!(clamped.chars().count(), MAX_CONTENT_CHARS);
        assert!(clamped.ends_with('…'));
    }
}
