pub mod schema;

use anyhow::{anyhow, Context, Result};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::info;

use crate::db::repositories::DBPool;

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies every pending migration, logging each one that ran.
pub fn run_migrations(pool: &DBPool) -> Result<()> {
    let mut conn = pool.get().context("Failed to get DB connection for migrations")?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow!("Failed to run migrations: {}", e))?;
    for version in &applied {
        info!(%version, "Applied migration");
    }
    Ok(())
}
