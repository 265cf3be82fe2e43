use axum::{
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::health::health;
use crate::handlers::results::get_user_results;
use crate::handlers::standings::get_standings;
use crate::handlers::teams::get_all_teams;
use crate::handlers::weeks::get_active_week;
use crate::league::League;

// Define the application state struct
#[derive(Clone)]
pub struct AppState {
    pub league: League,
}

// Function to create the Axum router
pub fn create_router(league: League) -> Router {
    let app_state = AppState { league };

    Router::new()
        .route("/health", get(health))
        .route("/v0/standings", get(get_standings))
        .route("/v0/teams", get(get_all_teams))
        .route("/v0/weeks/active", get(get_active_week))
        .route("/v0/results/:discord_id", get(get_user_results))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use diesel::pg::PgConnection;
    use diesel::r2d2::{ConnectionManager, Pool};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn unconnected_router() -> Router {
        // build_unchecked never opens a connection, so routes that skip the DB work offline.
        let manager = ConnectionManager::<PgConnection>::new("postgres://127.0.0.1:1/unused");
        let pool = Arc::new(Pool::builder().build_unchecked(manager));
        create_router(League::new(pool, 15))
    }

    #[tokio::test]
    async fn health_responds_ok() {
        let response = unconnected_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = unconnected_router()
            .oneshot(Request::builder().uri("/v0/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_numeric_discord_id_is_rejected() {
        let response = unconnected_router()
            .oneshot(Request::builder().uri("/v0/results/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
