use diesel::prelude::*;
use serde::Serialize;

use crate::db::postgres::schema::users;

/// A coach in the league. `admin` marks a commissioner.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize)]
#[diesel(table_name = users)]
#[diesel(primary_key(discord_id))]
pub struct User {
    pub discord_id: i64,
    pub username: String,
    pub admin: bool,
    pub team_id: Option<i32>,
}

/// A coach joined with the team they control, if any.
#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachTeam {
    pub discord_id: i64,
    pub username: String,
    pub team_id: Option<i32>,
    pub team_name: Option<String>,
}
