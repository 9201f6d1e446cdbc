//! JSON REST handlers for places.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};
use hbnb_domain::id::PlaceId;
use hbnb_domain::payload::Payload;
use hbnb_domain::place::Place;

use super::EmptyObject;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Place>>),
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
    Ok(Json<Place>),
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
    Created(Json<Place>),
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

/// `GET /places`
pub async fn list<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places().await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `GET /places/:id`
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
    let place = state.place_service.get_place(&PlaceId::from(id)).await?;
    Ok(GetResponse::Ok(Json(place)))
}

/// `POST /places` — requires `user_id` (an existing user) and `name`.
pub async fn create<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
    body: Bytes,
) -> Result<CreateResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let payload = Payload::from_slice(&body)?;
    let created = state.place_service.create_place(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /places/:id`
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
    // An unknown id wins over a bad body.
    let existing = state.place_service.get_place(&PlaceId::from(id)).await?;

    let payload = Payload::from_slice(&body)?;
    let updated = state.place_service.update_place(existing, payload).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /places/:id` — the place's reviews go with it.
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
    state.place_service.delete_place(&PlaceId::from(id)).await?;
    Ok(DeleteResponse::Ok)
}
