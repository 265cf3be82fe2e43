use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable, Text};
use serde::Serialize;

/// One coach's season record, loaded by raw SQL in `repositories::standings`.
#[derive(QueryableByName, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    #[diesel(sql_type = BigInt)]
    pub discord_id: i64,
    #[diesel(sql_type = Text)]
    pub username: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub team_name: Option<String>,
    #[diesel(sql_type = BigInt)]
    pub wins: i64,
    #[diesel(sql_type = BigInt)]
    pub losses: i64,
    #[diesel(sql_type = BigInt)]
    pub ties: i64,
}
