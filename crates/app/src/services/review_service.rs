//! Review service — use-cases for managing reviews scoped under places.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{PlaceId, ReviewId};
use hbnb_domain::payload::Payload;
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;

use super::ensure_user_exists;
use crate::ports::{PlaceRepository, ReviewRepository, UserRepository};

/// Application service for review CRUD operations.
///
/// Holds place and user repositories for the existence checks made before a
/// review is built.
pub struct ReviewService<R, P, U> {
    repo: R,
    places: P,
    users: U,
}

impl<R, P, U> ReviewService<R, P, U>
where
    R: ReviewRepository,
    P: PlaceRepository,
    U: UserRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, places: P, users: U) -> Self {
        Self {
            repo,
            places,
            users,
        }
    }

    /// Look up the place reviews are scoped under.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_place(&self, id: &PlaceId) -> Result<Place, HbnbError> {
        self.places.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Place",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List the reviews of one place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the place does not exist, or a
    /// storage error from a repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_reviews_of_place(
        &self,
        place_id: &PlaceId,
    ) -> Result<Vec<Review>, HbnbError> {
        let place = self.get_place(place_id).await?;
        self.repo.find_by_place(&place.id).await
    }

    /// Create a review of `place` from a client payload.
    ///
    /// The place is loaded first with [`get_place`](Self::get_place). Then
    /// `user_id` and `text` must be present and the author must exist.
    /// Nothing is stored unless all pass.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if a required key is missing or
    /// mistyped, [`HbnbError::NotFound`] if `user_id` names no user, or a
    /// storage error propagated from a repository.
    #[tracing::instrument(skip_all, fields(place_id = %place.id))]
    pub async fn create_review(
        &self,
        place: &Place,
        payload: Payload,
    ) -> Result<Review, HbnbError> {
        let author = Review::author_of(&payload)?;
        ensure_user_exists(&self.users, author.as_ref(), &payload).await?;

        let review = Review::from_payload(place.id.clone(), payload)?;
        self.repo.create(review).await
    }

    /// Look up a review by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no review with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_review(&self, id: &ReviewId) -> Result<Review, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Review",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Count stored reviews.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_reviews(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }

    /// Merge a client payload into a review already loaded with
    /// [`get_review`](Self::get_review). Its place and
    /// author never change.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `text` is mistyped,
    /// [`HbnbError::NotFound`] if the review was deleted in the meantime, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all, fields(id = %review.id))]
    pub async fn update_review(
        &self,
        mut review: Review,
        payload: Payload,
    ) -> Result<Review, HbnbError> {
        review.merge(payload)?;
        self.repo.update(review).await
    }

    /// Delete a review by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the review does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_review(&self, id: &ReviewId) -> Result<(), HbnbError> {
        self.repo.delete(id).await
    }
}
