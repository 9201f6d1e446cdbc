//! Axum router assembly.

use axum::Router;
use axum::response::Response;
use tower_http::trace::TraceLayer;

use hbnb_app::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes at `/` with a JSON 404 fallback.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<SR, UR, PR, RR>(state: AppState<SR, UR, PR, RR>) -> Router
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    Router::new()
        .merge(crate::api::routes())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> Response {
    ApiError::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use hbnb_app::services::place_service::PlaceService;
    use hbnb_app::services::review_service::ReviewService;
    use hbnb_app::services::state_service::StateService;
    use hbnb_app::services::user_service::UserService;
    use hbnb_domain::error::{HbnbError, NotFoundError};
    use hbnb_domain::id::{PlaceId, ReviewId, StateId, UserId};
    use hbnb_domain::place::Place;
    use hbnb_domain::review::Review;
    use hbnb_domain::state::State;
    use hbnb_domain::user::User;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    struct StubStateRepo;
    struct StubUserRepo;
    struct StubPlaceRepo;
    struct StubReviewRepo;

    /// The stubs store nothing, so every delete misses.
    fn missing(entity: &'static str, id: &impl ToString) -> HbnbError {
        NotFoundError {
            entity,
            id: id.to_string(),
        }
        .into()
    }

    impl StateRepository for StubStateRepo {
        async fn create(&self, state: State) -> Result<State, HbnbError> {
            Ok(state)
        }
        async fn get_by_id(&self, _id: &StateId) -> Result<Option<State>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<State>, HbnbError> {
            Ok(vec![])
        }
        async fn count(&self) -> Result<u64, HbnbError> {
            Ok(0)
        }
        async fn update(&self, state: State) -> Result<State, HbnbError> {
            Ok(state)
        }
        async fn delete(&self, id: &StateId) -> Result<(), HbnbError> {
            Err(missing("State", id))
        }
    }

    impl UserRepository for StubUserRepo {
        async fn create(&self, user: User) -> Result<User, HbnbError> {
            Ok(user)
        }
        async fn get_by_id(&self, _id: &UserId) -> Result<Option<User>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<User>, HbnbError> {
            Ok(vec![])
        }
        async fn count(&self) -> Result<u64, HbnbError> {
            Ok(0)
        }
        async fn update(&self, user: User) -> Result<User, HbnbError> {
            Ok(user)
        }
        async fn delete(&self, id: &UserId) -> Result<(), HbnbError> {
            Err(missing("User", id))
        }
    }

    impl PlaceRepository for StubPlaceRepo {
        async fn create(&self, place: Place) -> Result<Place, HbnbError> {
            Ok(place)
        }
        async fn get_by_id(&self, _id: &PlaceId) -> Result<Option<Place>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Place>, HbnbError> {
            Ok(vec![])
        }
        async fn count(&self) -> Result<u64, HbnbError> {
            Ok(0)
        }
        async fn update(&self, place: Place) -> Result<Place, HbnbError> {
            Ok(place)
        }
        async fn delete(&self, id: &PlaceId) -> Result<(), HbnbError> {
            Err(missing("Place", id))
        }
    }

    impl ReviewRepository for StubReviewRepo {
        async fn create(&self, review: Review) -> Result<Review, HbnbError> {
            Ok(review)
        }
        async fn get_by_id(&self, _id: &ReviewId) -> Result<Option<Review>, HbnbError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Review>, HbnbError> {
            Ok(vec![])
        }
        async fn find_by_place(&self, _place_id: &PlaceId) -> Result<Vec<Review>, HbnbError> {
            Ok(vec![])
        }
        async fn count(&self) -> Result<u64, HbnbError> {
            Ok(0)
        }
        async fn update(&self, review: Review) -> Result<Review, HbnbError> {
            Ok(review)
        }
        async fn delete(&self, id: &ReviewId) -> Result<(), HbnbError> {
            Err(missing("Review", id))
        }
    }

    fn test_state() -> AppState<StubStateRepo, StubUserRepo, StubPlaceRepo, StubReviewRepo> {
        AppState::new(
            StateService::new(StubStateRepo),
            UserService::new(StubUserRepo),
            PlaceService::new(StubPlaceRepo, StubUserRepo),
            ReviewService::new(StubReviewRepo, StubPlaceRepo, StubUserRepo),
        )
    }

    async fn send(method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = build(test_state())
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn should_return_ok_when_status_called() {
        let (status, body) = send(Method::GET, "/status", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "OK"}));
    }

    #[tokio::test]
    async fn should_count_every_collection_when_stats_called() {
        let (status, body) = send(Method::GET, "/stats", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({"places": 0, "reviews": 0, "states": 0, "users": 0})
        );
    }

    #[tokio::test]
    async fn should_return_json_404_when_route_unknown() {
        let (status, body) = send(Method::GET, "/nowhere", "").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_list_empty_array_with_or_without_trailing_slash() {
        for uri in ["/states", "/states/", "/users", "/users/", "/places/"] {
            let (status, body) = send(Method::GET, uri, "").await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, serde_json::json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn should_create_state_when_name_present() {
        let (status, body) = send(Method::POST, "/states/", r#"{"name":"Oregon"}"#).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["name"], "Oregon");
        assert_eq!(body["created_at"], body["updated_at"]);
        assert!(body["id"].is_string());
    }

    #[tokio::test]
    async fn should_return_generic_400_when_body_is_not_json() {
        let (status, body) = send(Method::POST, "/states", "name=Oregon").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"error": "Bad Request"}));
    }

    #[tokio::test]
    async fn should_return_400_when_required_field_missing() {
        let (status, _) = send(Method::POST, "/users", r#"{"email":"a@b.c"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_404_before_parsing_body_when_updating_unknown_record() {
        let (status, body) = send(Method::PUT, "/states/missing", "not json").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn should_return_404_when_reviewing_unknown_place() {
        let (status, _) = send(
            Method::POST,
            "/places/missing/reviews",
            r#"{"user_id":"u","text":"hi"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_404_when_deleting_unknown_record() {
        for uri in ["/states/x", "/users/x", "/places/x", "/reviews/x"] {
            let (status, _) = send(Method::DELETE, uri, "").await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        }
    }
}
