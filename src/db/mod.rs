// Declare database submodules
pub mod models;
pub mod postgres; // schema.rs and the embedded migrations
pub mod repositories;

use anyhow::{anyhow, Result};

/// Runs a synchronous Diesel call on the blocking pool and flattens the join error.
pub async fn blocking<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|join_err| anyhow!("Task execution failed: {}", join_err))?
}
