use crate::db::models::game_results::{GameResult, NewGameResult};
use crate::db::postgres::schema::results::dsl::*;
use crate::db::repositories::DBPool;
use anyhow::{Context, Result};
use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct ResultRepository {
    pool: Arc<DBPool>,
}

impl ResultRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        ResultRepository { pool }
    }

    fn get_conn(&self) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<diesel::PgConnection>>> {
        self.pool.get().context("Failed to get DB connection")
    }

    /// Records a coach's result for a week, replacing whatever was logged for that week before.
    pub fn upsert(&self, new_result: NewGameResult) -> Result<GameResult> {
        let mut conn = self.get_conn()?;
        diesel::insert_into(results)
            .values(&new_result)
            .on_conflict((discord_id, year, week_num))
            .do_update()
            .set((&new_result, reported_at.eq(Utc::now())))
            .get_result(&mut conn)
            .map_err(|e| {
                error!(result = ?new_result, error = ?e, "Failed to upsert GameResult");
                anyhow::anyhow!("Failed to upsert GameResult: {}", e)
            })
    }

    pub fn find_for_week(&self, coach_id: i64, target_year: i32, target_week: i32) -> Result<Option<GameResult>> {
        let mut conn = self.get_conn()?;
        results
            .filter(discord_id.eq(coach_id))
            .filter(year.eq(target_year))
            .filter(week_num.eq(target_week))
            .select(GameResult::as_select())
            .first(&mut conn)
            .optional()
            .with_context(|| format!("Failed to find result for {} in {} week {}", coach_id, target_year, target_week))
    }

    /// Whether the coach already faced `team` this season in a week other than `excluding_week`.
    pub fn has_played_opponent(&self, coach_id: i64, target_year: i32, team: i32, excluding_week: i32) -> Result<bool> {
        let mut conn = self.get_conn()?;
        diesel::select(exists(
            results
                .filter(discord_id.eq(coach_id))
                .filter(year.eq(target_year))
                .filter(opponent_id.eq(team))
                .filter(week_num.ne(excluding_week)),
        ))
        .get_result(&mut conn)
        .context("Failed to check previous opponents")
    }

    /// All results a coach has logged, newest week first.
    pub fn find_by_user(&self, coach_id: i64) -> Result<Vec<GameResult>> {
        let mut conn = self.get_conn()?;
        results
            .filter(discord_id.eq(coach_id))
            .order((year.desc(), week_num.desc()))
            .select(GameResult::as_select())
            .load(&mut conn)
            .with_context(|| format!("Failed to load results for {}", coach_id))
    }
}
