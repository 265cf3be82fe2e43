//! Component ids carry the state of the `/loggame` flow so the bot can stay
//! stateless between the slash command, the confirm buttons and the modal.
//!
//! Layouts:
//! - `report:{opponent_id}`
//! - `edit:{yes|no|bye}:{user_id}:{opponent_id}:{issued_unix}`

use std::str::FromStr;

use crate::error::InputError;

const REPORT_PREFIX: &str = "report";
const EDIT_PREFIX: &str = "edit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Yes,
    No,
    Bye,
}

impl EditAction {
    fn as_str(self) -> &'static str {
        match self {
            EditAction::Yes => "yes",
            EditAction::No => "no",
            EditAction::Bye => "bye",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomId {
    /// Submission of the game report modal.
    ReportModal { opponent_id: i32 },
    /// One of the buttons offered when a game is already logged for the week.
    ConfirmEdit {
        action: EditAction,
        user_id: u64,
        opponent_id: i32,
        issued_unix: i64,
    },
}

impl CustomId {
    pub fn encode(&self) -> String {
        match self {
            CustomId::ReportModal { opponent_id } => format!("{REPORT_PREFIX}:{opponent_id}"),
            CustomId::ConfirmEdit {
                action,
                user_id,
                opponent_id,
                issued_unix,
            } => format!(
                "{EDIT_PREFIX}:{}:{user_id}:{opponent_id}:{issued_unix}",
                action.as_str()
            ),
        }
    }

    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let mut parts = raw.split(':');
        match parts.next() {
            Some(REPORT_PREFIX) => {
                let opponent_id = field(raw, parts.next(), "opponent_id")?;
                no_trailing(raw, parts.next())?;
                Ok(CustomId::ReportModal { opponent_id })
            }
            Some(EDIT_PREFIX) => {
                let action = match parts.next() {
                    Some("yes") => EditAction::Yes,
                    Some("no") => EditAction::No,
                    Some("bye") => EditAction::Bye,
                    _ => {
                        return Err(InputError::MalformedCustomId {
                            custom_id: raw.to_string(),
                            field: "action",
                        })
                    }
                };
                let user_id = field(raw, parts.next(), "user_id")?;
                let opponent_id = field(raw, parts.next(), "opponent_id")?;
                let issued_unix = field(raw, parts.next(), "issued_unix")?;
                no_trailing(raw, parts.next())?;
                Ok(CustomId::ConfirmEdit {
                    action,
                    user_id,
                    opponent_id,
                    issued_unix,
                })
            }
            _ => Err(InputError::UnknownCustomId(raw.to_string())),
        }
    }
}

/// Whether a prompt issued at `issued_unix` may still be answered at `now_unix`.
pub fn is_expired(issued_unix: i64, now_unix: i64, timeout_secs: u64) -> bool {
    now_unix.saturating_sub(issued_unix) > i64::try_from(timeout_secs).unwrap_or(i64::MAX)
}

fn field<T: FromStr>(raw: &str, value: Option<&str>, name: &'static str) -> Result<T, InputError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| InputError::MalformedCustomId {
            custom_id: raw.to_string(),
            field: name,
        })
}

fn no_trailing(raw: &str, extra: Option<&str>) -> Result<(), InputError> {
    match extra {
        None => Ok(()),
        Some(_) => Err(InputError::MalformedCustomId {
            custom_id: raw.to_string(),
            field: "trailing",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_modal_id_parses_back() {
        let id = CustomId::ReportModal { opponent_id: 42 };
        assert_eq!(id.encode(), "report:42");
        assert_eq!(CustomId::parse("report:42").unwrap(), id);
    }

    #[test]
    fn confirm_edit_id_parses_back() {
        let id = CustomId::ConfirmEdit {
            action: EditAction::Bye,
            user_id: 184_467_440_737_095_516,
            opponent_id: 7,
            issued_unix: 1_790_000_000,
        };
        let encoded = id.encode();
        assert_eq!(encoded, "edit:bye:184467440737095516:7:1790000000");
        assert_eq!(CustomId::parse(&encoded).unwrap(), id);
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        assert_eq!(
            CustomId::parse("vote:1"),
            Err(InputError::UnknownCustomId("vote:1".to_string()))
        );
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert!(matches!(
            CustomId::parse("report:abc"),
            Err(InputError::MalformedCustomId { field: "opponent_id", .. })
        ));
        assert!(matches!(
            CustomId::parse("edit:maybe:1:2:3"),
            Err(InputError::MalformedCustomId { field: "action", .. })
        ));
        assert!(matches!(
            CustomId::parse("edit:yes:1:2"),
            Err(InputError::MalformedCustomId { field: "issued_unix", .. })
        ));
        assert!(matches!(
            CustomId::parse("report:1:2"),
            Err(InputError::MalformedCustomId { field: "trailing", .. })
        ));
    }

    #[test]
    fn expiry_is_exclusive_of_the_timeout() {
        assert!(!is_expired(1_000, 1_060, 60));
        assert!(is_expired(1_000, 1_061, 60));
        // Clock skew backwards never expires a prompt.
        assert!(!is_expired(1_000, 990, 60));
    }

    #[test]
    fn huge_timeout_never_expires() {
        assert!(!is_expired(0, 1_790_000_000, u64::MAX));
        assert!(!is_expired(i64::MIN, i64::MAX, u64::MAX));
    }
}
