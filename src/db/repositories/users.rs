use crate::db::models::users::{CoachTeam, User};
use crate::db::postgres::schema::{teams, users};
use crate::db::repositories::DBPool;
use anyhow::{Context, Result};
use diesel::dsl::exists;
use diesel::prelude::*;
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct UserRepository {
    pool: Arc<DBPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        UserRepository { pool }
    }

    fn get_conn(&self) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<diesel::PgConnection>>> {
        self.pool.get().context("Failed to get DB connection")
    }

    /// All coaches, ordered by username.
    pub fn find_all(&self) -> Result<Vec<User>> {
        let mut conn = self.get_conn()?;
        users::table
            .select(User::as_select())
            .order((users::username.asc(), users::discord_id.asc()))
            .load(&mut conn)
            .map_err(|e| {
                error!(error = ?e, "Failed to load users");
                anyhow::anyhow!("Failed to load users: {}", e)
            })
    }

    /// True when the Discord account is registered as a coach.
    pub fn is_coach(&self, target_discord_id: i64) -> Result<bool> {
        let mut conn = self.get_conn()?;
        diesel::select(exists(users::table.find(target_discord_id)))
            .get_result(&mut conn)
            .with_context(|| format!("Failed to check coach status for {}", target_discord_id))
    }

    /// True when the Discord account is a coach with commissioner rights.
    pub fn is_admin(&self, target_discord_id: i64) -> Result<bool> {
        let mut conn = self.get_conn()?;
        diesel::select(exists(
            users::table
                .filter(users::discord_id.eq(target_discord_id))
                .filter(users::admin.eq(true)),
        ))
        .get_result(&mut conn)
        .with_context(|| format!("Failed to check admin status for {}", target_discord_id))
    }

    /// True when some coach controls the given team, which makes a game against it a user game.
    pub fn controls_team(&self, target_team_id: i32) -> Result<bool> {
        let mut conn = self.get_conn()?;
        diesel::select(exists(users::table.filter(users::team_id.eq(target_team_id))))
            .get_result(&mut conn)
            .with_context(|| format!("Failed to check team control for team {}", target_team_id))
    }

    /// Every coach with their team, ordered by username.
    pub fn find_all_with_teams(&self) -> Result<Vec<CoachTeam>> {
        let mut conn = self.get_conn()?;
        users::table
            .left_join(teams::table)
            .select((
                users::discord_id,
                users::username,
                users::team_id,
                teams::name.nullable(),
            ))
            .order((users::username.asc(), users::discord_id.asc()))
            .load::<CoachTeam>(&mut conn)
            .context("Failed to load coaches with teams")
    }
}
