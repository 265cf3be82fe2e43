use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use cfb_bot::db::repositories::teams::TeamRepository;
use cfb_bot::import::{database_url_from_parts, read_team_names};
use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use tracing::info;

/// Loads team names from a CSV export into the `teams` table.
#[derive(Parser, Debug)]
#[command(name = "team-import", version, about)]
struct Args {
    /// CSV export; first row metadata, second row header with a `School` column.
    #[arg(long, default_value = "teams.csv")]
    csv: PathBuf,

    /// Full connection URL. Falls back to the DB_* settings when absent.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    db_host: String,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    db_port: u16,

    #[arg(long, env = "DB_NAME", default_value = "cfb26")]
    db_name: String,

    #[arg(long, env = "DB_USER", default_value = "cfbuser")]
    db_user: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    db_password: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let file = File::open(&args.csv)
        .with_context(|| format!("CSV file not found at {}", args.csv.display()))?;
    let teams = read_team_names(file)?;
    info!("Read {} teams from {}", teams.len(), args.csv.display());

    let database_url = match args.database_url.clone() {
        Some(url) => url,
        None => database_url_from_parts(
            &args.db_host,
            args.db_port,
            &args.db_name,
            &args.db_user,
            &args.db_password,
        )?,
    };

    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(1)
        .build(manager)
        .context("Error connecting to database")?;

    let repo = TeamRepository::new(Arc::new(pool));
    let inserted = repo.insert_names(&teams)?;
    info!(
        "Inserted {} teams into the database ({} already present).",
        inserted,
        teams.len() - inserted
    );
    Ok(())
}
