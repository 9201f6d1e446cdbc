//! Service status and record counts.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use hbnb_app::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /status`.
#[derive(Serialize)]
pub struct Status {
    pub status: &'static str,
}

/// Body of `GET /stats`: one count per collection.
#[derive(Serialize)]
pub struct Stats {
    pub places: u64,
    pub reviews: u64,
    pub states: u64,
    pub users: u64,
}

/// `GET /status`
pub async fn status() -> Json<Status> {
    Json(Status { status: "OK" })
}

/// `GET /stats`
pub async fn stats<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
) -> Result<Json<Stats>, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    Ok(Json(Stats {
        places: state.place_service.count_places().await?,
        reviews: state.review_service.count_reviews().await?,
        states: state.state_service.count_states().await?,
        users: state.user_service.count_users().await?,
    }))
}
