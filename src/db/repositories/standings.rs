use std::sync::Arc;
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable};
use anyhow::Result;

use super::DBPool;
use crate::db::models::standings::StandingRow;

/// Fetches every coach's record for `season_year` (all seasons when `None`).
///
/// Coaches without any results still appear with a 0-0-0 record. A result with
/// no winner that is not a bye counts as a tie. Wraps the synchronous Diesel
/// query in `spawn_blocking`.
pub async fn get_standings(pool: Arc<DBPool>, season_year: Option<i32>) -> Result<Vec<StandingRow>> {
    crate::db::blocking(move || {
        let mut conn = pool.get()?;

        let query = r#"
            SELECT
                u.discord_id,
                u.username,
                t.name AS team_name,
                COUNT(r.result_id) FILTER (WHERE r.user_win IS TRUE) AS wins,
                COUNT(r.result_id) FILTER (WHERE r.user_win IS FALSE) AS losses,
                COUNT(r.result_id) FILTER (WHERE r.user_win IS NULL AND NOT r.bye) AS ties
            FROM users u
            LEFT JOIN teams t ON t.team_id = u.team_id
            LEFT JOIN results r
                ON r.discord_id = u.discord_id
                AND ($1::INTEGER IS NULL OR r.year = $1)
            GROUP BY u.discord_id, u.username, t.name
            ORDER BY wins DESC, losses ASC, u.username ASC;
        "#;

        let rows = diesel::sql_query(query)
            .bind::<Nullable<Integer>, _>(season_year)
            .load::<StandingRow>(&mut conn)?;
        Ok(rows)
    })
    .await
}
