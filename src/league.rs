use std::sync::Arc;
use anyhow::Result;

use crate::db::blocking;
use crate::db::models::game_results::{GameResult, NewGameResult};
use crate::db::models::standings::StandingRow;
use crate::db::models::teams::Team;
use crate::db::models::users::{CoachTeam, User};
use crate::db::models::weeks::Week;
use crate::db::repositories::game_results::ResultRepository;
use crate::db::repositories::season::{Advancement, SeasonRepository};
use crate::db::repositories::standings::get_standings;
use crate::db::repositories::teams::TeamRepository;
use crate::db::repositories::users::UserRepository;
use crate::db::repositories::weeks::WeekRepository;
use crate::db::repositories::DBPool;

/// Async access to the league tables for the Discord side. Every call hops onto
/// the blocking pool since Diesel is synchronous.
#[derive(Clone)]
pub struct League {
    pool: Arc<DBPool>,
    users: Arc<UserRepository>,
    teams: Arc<TeamRepository>,
    weeks: Arc<WeekRepository>,
    results: Arc<ResultRepository>,
    season: Arc<SeasonRepository>,
}

impl League {
    pub fn new(pool: Arc<DBPool>, final_week: i32) -> Self {
        League {
            users: Arc::new(UserRepository::new(pool.clone())),
            teams: Arc::new(TeamRepository::new(pool.clone())),
            weeks: Arc::new(WeekRepository::new(pool.clone())),
            results: Arc::new(ResultRepository::new(pool.clone())),
            season: Arc::new(SeasonRepository::new(pool.clone(), final_week)),
            pool,
        }
    }

    pub async fn users(&self) -> Result<Vec<User>> {
        let repo = self.users.clone();
        blocking(move || repo.find_all()).await
    }

    pub async fn coaches_with_teams(&self) -> Result<Vec<CoachTeam>> {
        let repo = self.users.clone();
        blocking(move || repo.find_all_with_teams()).await
    }

    pub async fn is_coach(&self, discord_id: i64) -> Result<bool> {
        let repo = self.users.clone();
        blocking(move || repo.is_coach(discord_id)).await
    }

    pub async fn is_admin(&self, discord_id: i64) -> Result<bool> {
        let repo = self.users.clone();
        blocking(move || repo.is_admin(discord_id)).await
    }

    pub async fn controls_team(&self, team_id: i32) -> Result<bool> {
        let repo = self.users.clone();
        blocking(move || repo.controls_team(team_id)).await
    }

    pub async fn teams(&self) -> Result<Vec<Team>> {
        let repo = self.teams.clone();
        blocking(move || repo.find_all()).await
    }

    pub async fn team(&self, team_id: i32) -> Result<Option<Team>> {
        let repo = self.teams.clone();
        blocking(move || repo.find(team_id)).await
    }

    pub async fn active_week(&self) -> Result<Option<Week>> {
        let repo = self.weeks.clone();
        blocking(move || repo.find_active()).await
    }

    pub async fn game(&self, discord_id: i64, week: &Week) -> Result<Option<GameResult>> {
        let repo = self.results.clone();
        let (year, week_num) = (week.year, week.week_num);
        blocking(move || repo.find_for_week(discord_id, year, week_num)).await
    }

    pub async fn has_played_opponent(&self, discord_id: i64, week: &Week, opponent_id: i32) -> Result<bool> {
        let repo = self.results.clone();
        let (year, week_num) = (week.year, week.week_num);
        blocking(move || repo.has_played_opponent(discord_id, year, opponent_id, week_num)).await
    }

    pub async fn results_for(&self, discord_id: i64) -> Result<Vec<GameResult>> {
        let repo = self.results.clone();
        blocking(move || repo.find_by_user(discord_id)).await
    }

    pub async fn record(&self, result: NewGameResult) -> Result<GameResult> {
        let repo = self.results.clone();
        blocking(move || repo.upsert(result)).await
    }

    pub async fn advance(&self) -> Result<Option<Advancement>> {
        let repo = self.season.clone();
        blocking(move || repo.advance()).await
    }

    pub async fn maybe_auto_advance(&self) -> Result<Option<Advancement>> {
        let repo = self.season.clone();
        blocking(move || repo.maybe_auto_advance()).await
    }

    /// Standings for the active season, or across all seasons when no week is active.
    pub async fn standings(&self) -> Result<Vec<StandingRow>> {
        let year = self.active_week().await?.map(|w| w.year);
        get_standings(self.pool.clone(), year).await
    }
}
