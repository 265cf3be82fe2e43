use std::sync::Arc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::pg::PgConnection;
use anyhow::{Context, Result};

use crate::db::models::teams::{NewTeam, Team};
// Import the DSL from the auto-generated schema
use crate::db::postgres::schema::teams::dsl::*;
use super::DBPool;

/// Repository struct holding the connection pool for Team operations
#[derive(Clone)]
pub struct TeamRepository {
    pool: Arc<DBPool>,
}

impl TeamRepository {
    /// Creates a new repository instance.
    pub fn new(pool: Arc<DBPool>) -> Self {
        TeamRepository { pool }
    }

    fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>> {
        self.pool.get().context("Failed to get DB connection")
    }

    /// Retrieves every team, sorted by name.
    pub fn find_all(&self) -> Result<Vec<Team>> {
        let mut conn = self.get_conn()?;
        teams
            .select(Team::as_select())
            .order(name.asc())
            .load(&mut conn)
            .context("Failed to load teams")
    }

    /// Finds a Team by its primary key.
    pub fn find(&self, pk_id: i32) -> Result<Option<Team>> {
        let mut conn = self.get_conn()?;
        teams
            .find(pk_id)
            .select(Team::as_select())
            .first(&mut conn)
            .optional()
            .with_context(|| format!("Failed to find team {}", pk_id))
    }

    /// Bulk inserts team names, skipping names already present.
    /// Returns the number of rows actually inserted.
    pub fn insert_names(&self, names: &[String]) -> Result<usize> {
        let mut conn = self.get_conn()?;
        let rows: Vec<NewTeam> = names
            .iter()
            .map(|n| NewTeam { name: n.clone() })
            .collect();
        diesel::insert_into(teams)
            .values(&rows)
            .on_conflict(name)
            .do_nothing()
            .execute(&mut conn)
            .context("Failed to insert teams")
    }
}
