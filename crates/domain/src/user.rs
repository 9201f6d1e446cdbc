//! User — an account that owns places and writes reviews.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::UserId;
use crate::payload::{Extra, Payload};
use crate::time::{self, Timestamp};

/// A registered user.
///
/// `email` is fixed at creation; every other typed field may be updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    /// Keys checked, in order, when creating a user.
    pub const REQUIRED_ON_CREATE: &'static [&'static str] = &["email", "password"];

    /// Keys silently dropped from update payloads, on top of the reserved ones.
    pub const IGNORED_ON_UPDATE: &'static [&'static str] = &["email"];

    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Build a new user from a client payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first of `email`,
    /// `password` that is absent, or [`ValidationError::InvalidField`] when a
    /// known field has the wrong type.
    pub fn from_payload(payload: Payload) -> Result<Self, ValidationError> {
        payload.require(Self::REQUIRED_ON_CREATE)?;
        let mut payload = payload.without(&[]);
        let email: String = payload.take_required("email", "string")?;
        let password: String = payload.take_required("password", "string")?;
        let first_name: Option<Option<String>> = payload.take("first_name", "string")?;
        let last_name: Option<Option<String>> = payload.take("last_name", "string")?;

        Ok(User {
            first_name: first_name.flatten(),
            last_name: last_name.flatten(),
            ..Self::builder()
                .email(email)
                .password(password)
                .extra(payload.into_extra())
                .build()?
        })
    }

    /// Merge an update payload into this user and refresh `updated_at`.
    ///
    /// `email` is never changed. Nothing is changed when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] when a known field has the
    /// wrong type.
    pub fn merge(&mut self, payload: Payload) -> Result<(), ValidationError> {
        let mut payload = payload.without(Self::IGNORED_ON_UPDATE);
        let password: Option<String> = payload.take("password", "string")?;
        let first_name: Option<Option<String>> = payload.take("first_name", "string")?;
        let last_name: Option<Option<String>> = payload.take("last_name", "string")?;

        if let Some(password) = password {
            self.password = password;
        }
        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        self.extra.extend(payload.into_extra());
        self.updated_at = time::now();
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    email: Option<String>,
    password: Option<String>,
    extra: Extra,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn extra(mut self, extra: Extra) -> Self {
        self.extra = extra;
        self
    }

    /// Consume the builder and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `email` or `password`
    /// was never set.
    pub fn build(self) -> Result<User, ValidationError> {
        let now = time::now();
        Ok(User {
            id: self.id.unwrap_or_default(),
            email: self.email.ok_or(ValidationError::MissingField("email"))?,
            password: self
                .password
                .ok_or(ValidationError::MissingField("password"))?,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
            extra: self.extra,
        })
    }
}
