use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, error};

use crate::router::AppState;

// Handler for GET /v0/standings
pub async fn get_standings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    debug!("Fetching standings");

    match state.league.standings().await {
        Ok(rows) => Ok(Json(rows)),
        Err(db_err) => {
            error!("Database error fetching standings: {}", db_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", db_err)))
        }
    }
}
