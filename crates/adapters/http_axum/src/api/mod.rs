//! JSON REST API handler modules.
//!
//! Collection and item routes answer with or without a trailing slash;
//! `DELETE` only without.

pub mod index;
#[allow(clippy::missing_errors_doc)]
pub mod places;
#[allow(clippy::missing_errors_doc)]
pub mod reviews;
#[allow(clippy::missing_errors_doc)]
pub mod states;
#[allow(clippy::missing_errors_doc)]
pub mod users;

use axum::Router;
use axum::routing::get;
use serde::Serialize;

use hbnb_app::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};

use crate::state::AppState;

/// Serializes as `{}`, the body of a successful delete.
#[derive(Serialize)]
pub struct EmptyObject {}

/// Build the API router.
pub fn routes<SR, UR, PR, RR>() -> Router<AppState<SR, UR, PR, RR>>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        // Index
        .route("/status", get(index::status))
        .route("/stats", get(index::stats::<SR, UR, PR, RR>))
        // States
        .route(
            "/states",
            get(states::list::<SR, UR, PR, RR>).post(states::create::<SR, UR, PR, RR>),
        )
        .route(
            "/states/",
            get(states::list::<SR, UR, PR, RR>).post(states::create::<SR, UR, PR, RR>),
        )
        .route(
            "/states/{id}",
            get(states::get::<SR, UR, PR, RR>)
                .put(states::update::<SR, UR, PR, RR>)
                .delete(states::delete::<SR, UR, PR, RR>),
        )
        .route(
            "/states/{id}/",
            get(states::get::<SR, UR, PR, RR>).put(states::update::<SR, UR, PR, RR>),
        )
        // Users
        .route(
            "/users",
            get(users::list::<SR, UR, PR, RR>).post(users::create::<SR, UR, PR, RR>),
        )
        .route(
            "/users/",
            get(users::list::<SR, UR, PR, RR>).post(users::create::<SR, UR, PR, RR>),
        )
        .route(
            "/users/{id}",
            get(users::get::<SR, UR, PR, RR>)
                .put(users::update::<SR, UR, PR, RR>)
                .delete(users::delete::<SR, UR, PR, RR>),
        )
        .route(
            "/users/{id}/",
            get(users::get::<SR, UR, PR, RR>).put(users::update::<SR, UR, PR, RR>),
        )
        // Places
        .route(
            "/places",
            get(places::list::<SR, UR, PR, RR>).post(places::create::<SR, UR, PR, RR>),
        )
        .route(
            "/places/",
            get(places::list::<SR, UR, PR, RR>).post(places::create::<SR, UR, PR, RR>),
        )
        .route(
            "/places/{id}",
            get(places::get::<SR, UR, PR, RR>)
                .put(places::update::<SR, UR, PR, RR>)
                .delete(places::delete::<SR, UR, PR, RR>),
        )
        .route(
            "/places/{id}/",
            get(places::get::<SR, UR, PR, RR>).put(places::update::<SR, UR, PR, RR>),
        )
        // Reviews
        .route(
            "/places/{id}/reviews",
            get(reviews::list::<SR, UR, PR, RR>).post(reviews::create::<SR, UR, PR, RR>),
        )
        .route(
            "/places/{id}/reviews/",
            get(reviews::list::<SR, UR, PR, RR>).post(reviews::create::<SR, UR, PR, RR>),
        )
        .route(
            "/reviews/{id}",
            get(reviews::get::<SR, UR, PR, RR>)
                .put(reviews::update::<SR, UR, PR, RR>)
                .delete(reviews::delete::<SR, UR, PR, RR>),
        )
        .route(
            "/reviews/{id}/",
            get(reviews::get::<SR, UR, PR, RR>).put(reviews::update::<SR, UR, PR, RR>),
        )
}
