//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};
use hbnb_app::services::place_service::PlaceService;
use hbnb_app::services::review_service::ReviewService;
use hbnb_app::services::state_service::StateService;
use hbnb_app::services::user_service::UserService;

/// Application state shared across all axum handlers.
///
/// Generic over the four repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<SR, UR, PR, RR> {
    /// State CRUD service.
    pub state_service: Arc<StateService<SR>>,
    /// User CRUD service.
    pub user_service: Arc<UserService<UR>>,
    /// Place CRUD service.
    pub place_service: Arc<PlaceService<PR, UR>>,
    /// Review CRUD service, scoped under places.
    pub review_service: Arc<ReviewService<RR, PR, UR>>,
}

impl<SR, UR, PR, RR> Clone for AppState<SR, UR, PR, RR> {
    fn clone(&self) -> Self {
        Self {
            state_service: Arc::clone(&self.state_service),
            user_service: Arc::clone(&self.user_service),
            place_service: Arc::clone(&self.place_service),
            review_service: Arc::clone(&self.review_service),
        }
    }
}

impl<SR, UR, PR, RR> AppState<SR, UR, PR, RR>
where
    SR: StateRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        state_service: StateService<SR>,
        user_service: UserService<UR>,
        place_service: PlaceService<PR, UR>,
        review_service: ReviewService<RR, PR, UR>,
    ) -> Self {
        Self {
            state_service: Arc::new(state_service),
            user_service: Arc::new(user_service),
            place_service: Arc::new(place_service),
            review_service: Arc::new(review_service),
        }
    }
}
