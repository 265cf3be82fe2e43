use std::sync::Arc;
use diesel::prelude::*;
use anyhow::{Context, Result};

use crate::db::models::weeks::Week;
use crate::db::postgres::schema::weeks::dsl::*;
use super::DBPool;

#[derive(Clone)]
pub struct WeekRepository {
    pool: Arc<DBPool>,
}

impl WeekRepository {
    pub fn new(pool: Arc<DBPool>) -> Self {
        WeekRepository { pool }
    }

    fn get_conn(&self) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<diesel::PgConnection>>> {
        self.pool.get().context("Failed to get DB connection")
    }

    /// The week currently accepting reports, if one is set.
    pub fn find_active(&self) -> Result<Option<Week>> {
        let mut conn = self.get_conn()?;
        weeks
            .filter(active.eq(true))
            .select(Week::as_select())
            .first(&mut conn)
            .optional()
            .context("Failed to load active week")
    }
}
