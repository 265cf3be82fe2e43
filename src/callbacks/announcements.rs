use serenity::all::{ChannelId, Http};
use tracing::{error, info, warn};

use crate::db::models::weeks::Week;
use crate::league::League;

pub fn auto_advance_message(week: &Week) -> String {
    format!(
        "📅 All reports received. Advancing to Week {} ({}).",
        week.week_num, week.year
    )
}

/// Runs the auto-advance check after a report and announces a new week in `channel`.
/// Failures are logged only; the coach's report already succeeded.
pub async fn announce_auto_advance(league: &League, http: &Http, channel: ChannelId) {
    match league.maybe_auto_advance().await {
        Ok(Some(advancement)) => {
            info!(
                year = advancement.current.year,
                week = advancement.current.week_num,
                "Announcing automatic week advance"
            );
            if let Err(e) = channel
                .say(http, auto_advance_message(&advancement.current))
                .await
            {
                warn!(channel = %channel, "Failed to announce week advance: {}", e);
            }
        }
        Ok(None) => {}
        Err(e) => error!("Auto-advance check failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_new_week() {
        let week = Week {
            week_id: 3,
            year: 2027,
            week_num: 0,
            active: true,
        };
        assert_eq!(
            auto_advance_message(&week),
            "📅 All reports received. Advancing to Week 0 (2027)."
        );
    }
}
