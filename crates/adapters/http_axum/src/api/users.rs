//! JSON REST handlers for users.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};
use hbnb_domain::id::UserId;
use hbnb_domain::payload::Payload;
use hbnb_domain::user::User;

use super::EmptyObject;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<User>>),
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
    Ok(Json<User>),
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
    Created(Json<User>),
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

/// `GET /users`
pub async fn list<SR, UR, PR, RR>(
    State(state): State<AppState<SR, UR, PR, RR>>,
) -> Result<ListResponse, ApiError>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    let users = state.user_service.list_users().await?;
    Ok(ListResponse::Ok(Json(users)))
}

/// `GET /users/:id`
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
    let user = state.user_service.get_user(&UserId::from(id)).await?;
    Ok(GetResponse::Ok(Json(user)))
}

/// `POST /users` — requires `email` and `password`.
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
    let created = state.user_service.create_user(payload).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /users/:id` — `email` is silently kept.
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
    let existing = state.user_service.get_user(&UserId::from(id)).await?;

    let payload = Payload::from_slice(&body)?;
    let updated = state.user_service.update_user(existing, payload).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /users/:id`
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
    state.user_service.delete_user(&UserId::from(id)).await?;
    Ok(DeleteResponse::Ok)
}
