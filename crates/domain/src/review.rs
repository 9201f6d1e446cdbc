//! Review — a user's text about a place.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{PlaceId, ReviewId, UserId};
use crate::payload::{Extra, Payload};
use crate::time::{self, Timestamp};

/// A review left by a user on a place.
///
/// Both references are fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub place_id: PlaceId,
    pub user_id: UserId,
    pub text: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Review {
    /// Keys checked, in order, when creating a review.
    pub const REQUIRED_ON_CREATE: &'static [&'static str] = &["user_id", "text"];

    /// Keys silently dropped from update payloads, on top of the reserved ones.
    pub const IGNORED_ON_UPDATE: &'static [&'static str] = &["user_id", "place_id"];

    /// Create a builder for constructing a [`Review`].
    #[must_use]
    pub fn builder() -> ReviewBuilder {
        ReviewBuilder::default()
    }

    /// Read the author id out of a create payload without consuming it.
    ///
    /// A `user_id` that is not a string cannot name any user, so it comes
    /// back as `None` for the caller to report as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first of `user_id`,
    /// `text` that is absent.
    pub fn author_of(payload: &Payload) -> Result<Option<UserId>, ValidationError> {
        payload.require(Self::REQUIRED_ON_CREATE)?;
        Ok(payload
            .peek("user_id")
            .and_then(serde_json::Value::as_str)
            .map(UserId::from))
    }

    /// Build a new review for `place_id` from a client payload.
    ///
    /// Any `place_id` in the payload is discarded in favour of the argument.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first of `user_id`,
    /// `text` that is absent, or [`ValidationError::InvalidField`] when a
    /// known field has the wrong type.
    pub fn from_payload(place_id: PlaceId, payload: Payload) -> Result<Self, ValidationError> {
        payload.require(Self::REQUIRED_ON_CREATE)?;
        let mut payload = payload.without(&["place_id"]);
        let user_id: String = payload.take_required("user_id", "string")?;
        let text: String = payload.take_required("text", "string")?;

        Self::builder()
            .place_id(place_id)
            .user_id(UserId::from(user_id))
            .text(text)
            .extra(payload.into_extra())
            .build()
    }

    /// Merge an update payload into this review and refresh `updated_at`.
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] if `text` is not a string.
    pub fn merge(&mut self, payload: Payload) -> Result<(), ValidationError> {
        let mut payload = payload.without(Self::IGNORED_ON_UPDATE);
        let text: Option<String> = payload.take("text", "string")?;

        if let Some(text) = text {
            self.text = text;
        }
        self.extra.extend(payload.into_extra());
        self.updated_at = time::now();
        Ok(())
    }
}

/// Step-by-step builder for [`Review`].
#[derive(Debug, Default)]
pub struct ReviewBuilder {
    id: Option<ReviewId>,
    place_id: Option<PlaceId>,
    user_id: Option<UserId>,
    text: Option<String>,
    extra: Extra,
}

impl ReviewBuilder {
    #[must_use]
    pub fn id(mut self, id: ReviewId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn place_id(mut self, place_id: PlaceId) -> Self {
        self.place_id = Some(place_id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }

    /// Consume the builder and return a [`Review`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `place_id`, `user_id` or
    /// `text` was never set.
    pub fn build(self) -> Result<Review, ValidationError> {
        let now = time::now();
        Ok(Review {
            id: self.id.unwrap_or_default(),
            place_id: self
                .place_id
                .ok_or(ValidationError::MissingField("place_id"))?,
            user_id: self.user_id.ok_or(ValidationError::MissingField("user_id"))?,
            text: self.text.ok_or(ValidationError::MissingField("text"))?,
            created_at: now,
            updated_at: now,
            extra: self.extra,
        })
    }
}
