use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, error};

use crate::router::AppState;

// Handler for GET /v0/teams
pub async fn get_all_teams(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    debug!("Fetching all teams");

    match state.league.teams().await {
        Ok(teams) => Ok(Json(teams)),
        Err(db_err) => {
            error!("Database error fetching teams: {}", db_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", db_err)))
        }
    }
}
