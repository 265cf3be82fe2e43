use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::{debug, error};

use crate::router::AppState;

// Handler for GET /v0/weeks/active
pub async fn get_active_week(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    debug!("Fetching active week");

    match state.league.active_week().await {
        Ok(Some(week)) => Ok(Json(week)),
        Ok(None) => Err((StatusCode::NOT_FOUND, "No active week is set".to_string())),
        Err(db_err) => {
            error!("Database error fetching active week: {}", db_err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", db_err)))
        }
    }
}
