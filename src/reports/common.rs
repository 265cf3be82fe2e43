/// Result of a game from the reporting coach's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn from_scores(user_score: i32, opponent_score: i32) -> Self {
        match user_score.cmp(&opponent_score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Value stored in `results.user_win`; ties are NULL.
    pub fn user_win(self) -> Option<bool> {
        match self {
            Outcome::Win => Some(true),
            Outcome::Loss => Some(false),
            Outcome::Tie => None,
        }
    }
}

pub(super) fn outcome_to_string(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => "WIN".to_string(),
        Outcome::Loss => "LOSS".to_string(),
        Outcome::Tie => "TIE".to_string(),
    }
}

/// Parses a score field from the report modal. Blank or non-numeric input yields `None`.
pub fn parse_score(raw: Option<&str>) -> Option<i32> {
    let value = raw?.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
