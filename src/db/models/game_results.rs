use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use crate::db::postgres::schema::results;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq, Serialize)]
#[diesel(table_name = results)]
#[diesel(primary_key(result_id))]
pub struct GameResult {
    pub result_id: i32,
    pub discord_id: i64,
    pub year: i32,
    pub week_num: i32,
    pub opponent_id: Option<i32>,
    pub user_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub user_win: Option<bool>,
    pub notes: Option<String>,
    pub user_game: bool,
    pub bye: bool,
    pub reported_at: DateTime<Utc>,
}

/// Insert/replace payload. `None` fields overwrite with NULL when a coach edits a week.
#[derive(Insertable, AsChangeset, Debug, Clone, PartialEq)]
#[diesel(table_name = results)]
#[diesel(treat_none_as_null = true)]
pub struct NewGameResult {
    pub discord_id: i64,
    pub year: i32,
    pub week_num: i32,
    pub opponent_id: Option<i32>,
    pub user_score: Option<i32>,
    pub opponent_score: Option<i32>,
    pub user_win: Option<bool>,
    pub notes: Option<String>,
    pub user_game: bool,
    pub bye: bool,
}
