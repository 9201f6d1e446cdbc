//! Place — a rentable listing owned by a user. Reviews hang off places.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{PlaceId, UserId};
use crate::payload::{Extra, Payload};
use crate::time::{self, Timestamp};

/// A listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Typed fields that may be set both on create and on update.
#[derive(Default)]
struct Details {
    description: Option<Option<String>>,
    number_rooms: Option<u32>,
    number_bathrooms: Option<u32>,
    max_guest: Option<u32>,
    price_by_night: Option<u32>,
    latitude: Option<Option<f64>>,
    longitude: Option<Option<f64>>,
}

impl Details {
    fn take(payload: &mut Payload) -> Result<Self, ValidationError> {
        Ok(Self {
            description: payload.take("description", "string")?,
            number_rooms: payload.take_count("number_rooms")?,
            number_bathrooms: payload.take_count("number_bathrooms")?,
            max_guest: payload.take_count("max_guest")?,
            price_by_night: payload.take_count("price_by_night")?,
            latitude: payload.take("latitude", "number")?,
            longitude: payload.take("longitude", "number")?,
        })
    }

    fn apply(self, place: &mut Place) {
        if let Some(description) = self.description {
            place.description = description;
        }
        if let Some(value) = self.number_rooms {
            place.number_rooms = value;
        }
        if let Some(value) = self.number_bathrooms {
            place.number_bathrooms = value;
        }
        if let Some(value) = self.max_guest {
            place.max_guest = value;
        }
        if let Some(value) = self.price_by_night {
            place.price_by_night = value;
        }
        if let Some(latitude) = self.latitude {
            place.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            place.longitude = longitude;
        }
    }
}

impl Place {
    /// Keys checked, in order, when creating a place.
    pub const REQUIRED_ON_CREATE: &'static [&'static str] = &["user_id", "name"];

    /// Keys silently dropped from update payloads, on top of the reserved ones.
    pub const IGNORED_ON_UPDATE: &'static [&'static str] = &["user_id"];

    /// Create a builder for constructing a [`Place`].
    #[must_use]
    pub fn builder() -> PlaceBuilder {
        PlaceBuilder::default()
    }

    /// Read the owner id out of a create payload without consuming it.
    ///
    /// A `user_id` that is not a string cannot name any user, so it comes
    /// back as `None` for the caller to report as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first of `user_id`,
    /// `name` that is absent.
    pub fn owner_of(payload: &Payload) -> Result<Option<UserId>, ValidationError> {
        payload.require(Self::REQUIRED_ON_CREATE)?;
        Ok(payload
            .peek("user_id")
            .and_then(serde_json::Value::as_str)
            .map(UserId::from))
    }

    /// Build a new place from a client payload.
    ///
    /// Whether `user_id` names an existing user is checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first of `user_id`,
    /// `name` that is absent, or [`ValidationError::InvalidField`] when a
    /// known field has the wrong type.
    pub fn from_payload(payload: Payload) -> Result<Self, ValidationError> {
        payload.require(Self::REQUIRED_ON_CREATE)?;
        let mut payload = payload.without(&[]);
        let user_id: String = payload.take_required("user_id", "string")?;
        let name: String = payload.take_required("name", "string")?;
        let details = Details::take(&mut payload)?;

        let mut place = Self::builder()
            .user_id(UserId::from(user_id))
            .name(name)
            .extra(payload.into_extra())
            .build()?;
        details.apply(&mut place);
        Ok(place)
    }

    /// Merge an update payload into this place and refresh `updated_at`.
    ///
    /// The owner never changes. Nothing is changed when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] when a known field has the
    /// wrong type.
    pub fn merge(&mut self, payload: Payload) -> Result<(), ValidationError> {
        let mut payload = payload.without(Self::IGNORED_ON_UPDATE);
        let name: Option<String> = payload.take("name", "string")?;
        let details = Details::take(&mut payload)?;

        if let Some(name) = name {
            self.name = name;
        }
        details.apply(self);
        self.extra.extend(payload.into_extra());
        self.updated_at = time::now();
        Ok(())
    }
}

/// Step-by-step builder for [`Place`].
#[derive(Debug, Default)]
pub struct PlaceBuilder {
    id: Option<PlaceId>,
    user_id: Option<UserId>,
    name: Option<String>,
    extra: Extra,
}

impl PlaceBuilder {
    #[must_use]
    pub fn id(mut self, id: PlaceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }

    /// Consume the builder and return a [`Place`] with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `user_id` was never set.
    pub fn build(self) -> Result<Place, ValidationError> {
        let now = time::now();
        Ok(Place {
            id: self.id.unwrap_or_default(),
            user_id: self.user_id.ok_or(ValidationError::MissingField("user_id"))?,
            name: self.name.unwrap_or_default(),
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
            created_at: now,
            updated_at: now,
            extra: self.extra,
        })
    }
}
