use crate::db::models::game_results::NewGameResult;
use crate::db::models::weeks::Week;
use crate::error::InputError;

use super::common::{outcome_to_string, parse_score, Outcome};

pub const BYE_NOTES: &str = "Bye week";

/// A coach's report for the active week, as entered through `/loggame`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameReport {
    Game {
        opponent_id: i32,
        user_score: i32,
        opponent_score: i32,
        notes: Option<String>,
        user_game: bool,
    },
    Bye,
}

impl GameReport {
    /// Builds a game report from the raw modal fields. Both scores must be present.
    pub fn from_fields(
        opponent_id: i32,
        raw_user_score: Option<&str>,
        raw_opponent_score: Option<&str>,
        raw_notes: Option<&str>,
        user_game: bool,
    ) -> Result<Self, InputError> {
        let (Some(user_score), Some(opponent_score)) =
            (parse_score(raw_user_score), parse_score(raw_opponent_score))
        else {
            return Err(InputError::MissingScore);
        };

        let notes = raw_notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(GameReport::Game {
            opponent_id,
            user_score,
            opponent_score,
            notes,
            user_game,
        })
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameReport::Game {
                user_score,
                opponent_score,
                ..
            } => Some(Outcome::from_scores(*user_score, *opponent_score)),
            GameReport::Bye => None,
        }
    }

    /// Maps the report onto the row stored for `discord_id` in `week`.
    pub fn try_map_to_db(&self, discord_id: i64, week: &Week) -> NewGameResult {
        match self {
            GameReport::Game {
                opponent_id,
                user_score,
                opponent_score,
                notes,
                user_game,
            } => NewGameResult {
                discord_id,
                year: week.year,
                week_num: week.week_num,
                opponent_id: Some(*opponent_id),
                user_score: Some(*user_score),
                opponent_score: Some(*opponent_score),
                user_win: self.outcome().and_then(Outcome::user_win),
                notes: notes.clone(),
                user_game: *user_game,
                bye: false,
            },
            GameReport::Bye => NewGameResult {
                discord_id,
                year: week.year,
                week_num: week.week_num,
                opponent_id: None,
                user_score: None,
                opponent_score: None,
                user_win: None,
                notes: Some(BYE_NOTES.to_string()),
                user_game: false,
                bye: true,
            },
        }
    }

    /// Public confirmation posted after the report is saved.
    pub fn summary(&self, opponent_name: &str) -> String {
        match self {
            GameReport::Game {
                user_score,
                opponent_score,
                notes,
                ..
            } => {
                let mut summary = format!("✅ Recorded game vs **{}**.", opponent_name);
                if let Some(outcome) = self.outcome() {
                    summary.push_str(&format!(
                        "\nScore: **{}–{}**\nOutcome: **{}**",
                        user_score,
                        opponent_score,
                        outcome_to_string(outcome)
                    ));
                }
                if let Some(notes) = notes {
                    summary.push_str(&format!("\nNotes: {}", notes));
                }
                summary
            }
            GameReport::Bye => "✅ Logged a bye week with no opponent or score.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week() -> Week {
        Week {
            week_id: 7,
            year: 2026,
            week_num: 3,
            active: true,
        }
    }

    #[test]
    fn from_fields_requires_both_scores() {
        let err = GameReport::from_fields(12, Some("24"), Some(""), None, false).unwrap_err();
        assert_eq!(err, InputError::MissingScore);

        let err = GameReport::from_fields(12, None, Some("3"), None, false).unwrap_err();
        assert_eq!(err, InputError::MissingScore);
    }

    #[test]
    fn from_fields_drops_blank_notes() {
        let report = GameReport::from_fields(12, Some("24"), Some("17"), Some("   "), false).unwrap();
        match report {
            GameReport::Game { notes, .. } => assert_eq!(notes, None),
            GameReport::Bye => panic!("expected a game"),
        }
    }

    #[test]
    fn game_maps_to_row_for_active_week() {
        let report =
            GameReport::from_fields(12, Some("24"), Some("17"), Some(" OT thriller "), true).unwrap();
        let row = report.try_map_to_db(99, &week());

        assert_eq!(row.discord_id, 99);
        assert_eq!((row.year, row.week_num), (2026, 3));
        assert_eq!(row.opponent_id, Some(12));
        assert_eq!(row.user_score, Some(24));
        assert_eq!(row.opponent_score, Some(17));
        assert_eq!(row.user_win, Some(true));
        assert_eq!(row.notes.as_deref(), Some("OT thriller"));
        assert!(row.user_game);
        assert!(!row.bye);
    }

    #[test]
    fn tie_maps_to_null_winner() {
        let report = GameReport::from_fields(5, Some("14"), Some("14"), None, false).unwrap();
        assert_eq!(report.try_map_to_db(1, &week()).user_win, None);
    }

    #[test]
    fn bye_maps_to_empty_game() {
        let row = GameReport::Bye.try_map_to_db(99, &week());

        assert_eq!(row.opponent_id, None);
        assert_eq!(row.user_score, None);
        assert_eq!(row.opponent_score, None);
        assert_eq!(row.user_win, None);
        assert_eq!(row.notes.as_deref(), Some(BYE_NOTES));
        assert!(!row.user_game);
        assert!(row.bye);
    }

    #[test]
    fn summary_includes_score_outcome_and_notes() {
        let report = GameReport::from_fields(12, Some("10"), Some("27"), Some("rough one"), false).unwrap();
        assert_eq!(
            report.summary("Auburn"),
            "✅ Recorded game vs **Auburn**.\nScore: **10–27**\nOutcome: **LOSS**\nNotes: rough one"
        );
    }

    #[test]
    fn summary_without_notes() {
        let report = GameReport::from_fields(12, Some("31"), Some("31"), None, false).unwrap();
        assert_eq!(
            report.summary("Alabama"),
            "✅ Recorded game vs **Alabama**.\nScore: **31–31**\nOutcome: **TIE**"
        );
    }
}
