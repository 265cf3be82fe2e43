use thiserror::Error;

/// Rejections of coach input and of component ids coming back from Discord.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please provide **both** scores or leave both blank.")]
    MissingScore,

    #[error("Invalid opponent selection.")]
    InvalidOpponent(String),

    #[error("unrecognized component id `{0}`")]
    UnknownCustomId(String),

    #[error("malformed field `{field}` in component id `{custom_id}`")]
    MalformedCustomId {
        custom_id: String,
        field: &'static str,
    },
}
