use std::sync::Arc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::db::models::weeks::{NewWeek, Week};
use crate::db::postgres::schema::{results, users, weeks};
use super::DBPool;

/// The week that follows `(year, week_num)`. Past `final_week` the season rolls over to week 0.
pub fn next_week(year: i32, week_num: i32, final_week: i32) -> (i32, i32) {
    if week_num >= final_week {
        (year + 1, 0)
    } else {
        (year, week_num + 1)
    }
}

/// Every coach has reported once the distinct reporters reach the coach count.
pub fn all_reported(coaches: i64, reporters: i64) -> bool {
    coaches > 0 && reporters >= coaches
}

/// A completed week transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advancement {
    pub previous: Week,
    pub current: Week,
}

/// Week transitions. Each call locks the active week row so concurrent reports
/// and `/advance` cannot double-advance.
#[derive(Clone)]
pub struct SeasonRepository {
    pool: Arc<DBPool>,
    final_week: i32,
}

impl SeasonRepository {
    pub fn new(pool: Arc<DBPool>, final_week: i32) -> Self {
        SeasonRepository { pool, final_week }
    }

    fn get_conn(&self) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<PgConnection>>> {
        self.pool.get().context("Failed to get DB connection")
    }

    /// Moves the season forward one week. Returns `None` when no week is active.
    pub fn advance(&self) -> Result<Option<Advancement>> {
        let mut conn = self.get_conn()?;
        let final_week = self.final_week;
        conn.transaction::<_, anyhow::Error, _>(|conn| {
            let Some(previous) = lock_active_week(conn)? else {
                return Ok(None);
            };
            let current = activate_next(conn, &previous, final_week)?;
            info!(
                from_year = previous.year,
                from_week = previous.week_num,
                to_year = current.year,
                to_week = current.week_num,
                "Advanced week"
            );
            Ok(Some(Advancement { previous, current }))
        })
    }

    /// Advances only if every coach has a result for the active week.
    pub fn maybe_auto_advance(&self) -> Result<Option<Advancement>> {
        let mut conn = self.get_conn()?;
        let final_week = self.final_week;
        conn.transaction::<_, anyhow::Error, _>(|conn| {
            let Some(previous) = lock_active_week(conn)? else {
                return Ok(None);
            };

            let coaches: i64 = users::table.count().get_result(conn)?;
            let reporters = results::table
                .filter(results::year.eq(previous.year))
                .filter(results::week_num.eq(previous.week_num))
                .select(results::discord_id)
                .distinct()
                .load::<i64>(conn)?
                .len() as i64;
            debug!(coaches, reporters, week = previous.week_num, "Checked report completeness");

            if !all_reported(coaches, reporters) {
                return Ok(None);
            }

            let current = activate_next(conn, &previous, final_week)?;
            info!(
                year = current.year,
                week = current.week_num,
                "All reports received, advanced week"
            );
            Ok(Some(Advancement { previous, current }))
        })
    }
}

fn lock_active_week(conn: &mut PgConnection) -> Result<Option<Week>> {
    let locked = weeks::table
        .filter(weeks::active.eq(true))
        .select(Week::as_select())
        .for_update()
        .load::<Week>(conn)
        .context("Failed to lock active week")?;
    Ok(locked.into_iter().next())
}

fn activate_next(conn: &mut PgConnection, previous: &Week, final_week: i32) -> Result<Week> {
    diesel::update(weeks::table.find(previous.week_id))
        .set(weeks::active.eq(false))
        .execute(conn)
        .context("Failed to deactivate current week")?;

    let (next_year, next_num) = next_week(previous.year, previous.week_num, final_week);
    diesel::insert_into(weeks::table)
        .values(&NewWeek {
            year: next_year,
            week_num: next_num,
            active: true,
        })
        .on_conflict((weeks::year, weeks::week_num))
        .do_update()
        .set(weeks::active.eq(true))
        .returning(Week::as_returning())
        .get_result(conn)
        .context("Failed to activate next week")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_week_moves_forward_within_season() {
        assert_eq!(next_week(2026, 0, 15), (2026, 1));
        assert_eq!(next_week(2026, 14, 15), (2026, 15));
    }

    #[test]
    fn next_week_rolls_over_after_final_week() {
        assert_eq!(next_week(2026, 15, 15), (2027, 0));
    }

    #[test]
    fn next_week_rolls_over_when_already_past_final_week() {
        // A week beyond the configured final week (e.g. bowl weeks inserted by hand) still rolls over.
        assert_eq!(next_week(2026, 18, 15), (2027, 0));
    }

    #[test]
    fn all_reported_requires_every_coach() {
        assert!(!all_reported(4, 3));
        assert!(all_reported(4, 4));
    }

    #[test]
    fn all_reported_is_false_without_coaches() {
        assert!(!all_reported(0, 0));
    }
}
