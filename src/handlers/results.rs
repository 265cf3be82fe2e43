use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, error};

use crate::router::AppState;

// Handler for GET /v0/results/:discord_id
pub async fn get_user_results(
    State(state): State<AppState>,
    Path(discord_id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    debug!("Fetching results for coach: {}", discord_id);

    match state.league.results_for(discord_id).await {
        Ok(results) => Ok(Json(results)),
        Err(db_err) => {
            error!("Database error fetching results: {}", db_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", db_err)))
        }
    }
}
