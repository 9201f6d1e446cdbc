//! Storage port — repository traits for persistence.
//!
//! Every mutating call is durable once its future resolves; there is no
//! separate "save" step and no batching across calls.

use std::future::Future;

use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

/// Repository for persisting and querying [`State`]s.
pub trait StateRepository {
    /// Persist a new state.
    fn create(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Get a state by its unique identifier.
    fn get_by_id(
        &self,
        id: &StateId,
    ) -> impl Future<Output = Result<Option<State>, HbnbError>> + Send;

    /// Get all states, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<State>, HbnbError>> + Send;

    /// Count stored states without loading them.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;

    /// Overwrite an existing state.
    ///
    /// Fails with [`HbnbError::NotFound`] when no row has the state's id.
    fn update(&self, state: State) -> impl Future<Output = Result<State, HbnbError>> + Send;

    /// Delete a state by its unique identifier.
    ///
    /// Fails with [`HbnbError::NotFound`] when nothing was deleted.
    fn delete(&self, id: &StateId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`User`]s.
pub trait UserRepository {
    /// Persist a new user.
    fn create(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Get a user by its unique identifier.
    fn get_by_id(
        &self,
        id: &UserId,
    ) -> impl Future<Output = Result<Option<User>, HbnbError>> + Send;

    /// Get all users, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<User>, HbnbError>> + Send;

    /// Count stored users without loading them.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;

    /// Overwrite an existing user.
    ///
    /// Fails with [`HbnbError::NotFound`] when no row has the user's id.
    fn update(&self, user: User) -> impl Future<Output = Result<User, HbnbError>> + Send;

    /// Delete a user, along with the places and reviews they own.
    ///
    /// Fails with [`HbnbError::NotFound`] when nothing was deleted.
    fn delete(&self, id: &UserId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`Place`]s.
pub trait PlaceRepository {
    /// Persist a new place.
    fn create(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Get a place by its unique identifier.
    fn get_by_id(
        &self,
        id: &PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    /// Get all places, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Count stored places without loading them.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;

    /// Overwrite an existing place.
    ///
    /// Fails with [`HbnbError::NotFound`] when no row has the place's id.
    fn update(&self, place: Place) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    /// Delete a place, along with its reviews.
    ///
    /// Fails with [`HbnbError::NotFound`] when nothing was deleted.
    fn delete(&self, id: &PlaceId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}

/// Repository for persisting and querying [`Review`]s.
pub trait ReviewRepository {
    /// Persist a new review.
    fn create(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    /// Get a review by its unique identifier.
    fn get_by_id(
        &self,
        id: &ReviewId,
    ) -> impl Future<Output = Result<Option<Review>, HbnbError>> + Send;

    /// Get all reviews, in storage order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send;

    /// Get the reviews written about one place, in storage order.
    fn find_by_place(
        &self,
        place_id: &PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send;

    /// Count stored reviews without loading them.
    fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send;

    /// Overwrite an existing review.
    ///
    /// Fails with [`HbnbError::NotFound`] when no row has the review's id.
    fn update(&self, review: Review) -> impl Future<Output = Result<Review, HbnbError>> + Send;

    /// Delete a review by its unique identifier.
    ///
    /// Fails with [`HbnbError::NotFound`] when nothing was deleted.
    fn delete(&self, id: &ReviewId) -> impl Future<Output = Result<(), HbnbError>> + Send;
}
