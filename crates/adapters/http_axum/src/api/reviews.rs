//! JSON REST handlers for reviews.
//!
//! Reviews are listed and created under their place
//! (`/places/{place_id}/reviews`) and addressed directly by id otherwise.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};
use hbnb_domain::id::{PlaceId, ReviewId};
use hbnb_domain::payload::Payload;
use hbnb_domain::review::Review;

use super::EmptyObject;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Review>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Review>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Review>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => Json(EmptyObject {}).into_response(),
        }
    }
}

/// `GET /places/:place_id/reviews`
pub async fn list<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let reviews = state
        .review_service
        .list_reviews_of_place(&PlaceId::from(place_id))
        .await?;
    Ok(ListResponse::Ok(Json(reviews)))
}

/// `GET /reviews/:id`
pub async fn get<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let review = state.review_service.get_review(&ReviewId::from(id)).await?;
    Ok(GetResponse::Ok(Json(review)))
}

/// `POST /places/:place_id/reviews` — requires `user_id` (an existing user)
/// and `text`.
pub async fn create<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
    Path(place_id): Path<String>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    // An unknown place wins over a bad body.
    let place = state
        .review_service
        .get_place(&PlaceId::from(place_id))
        .await?;

    let payload = Payload::from_slice(&body)?;
    let created = state.review_service.create_review(&place, payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /reviews/:id` — only `text` and free-form attributes change.
pub async fn update<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<GetResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let existing = state.review_service.get_review(&ReviewId::from(id)).await?;

    let payload = Payload::from_slice(&body)?;
    let updated = state.review_service.update_review(existing, payload).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /reviews/:id`
pub async fn delete<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    state
        .review_service
        .delete_review(&ReviewId::from(id))
        .await?;
    Ok(DeleteResponse::Ok)
}
