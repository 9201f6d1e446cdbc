//! State — a named geographic region.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::StateId;
use crate::payload::{Extra, Payload};
use crate::time::{self, Timestamp};

/// A geographic state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub id: StateId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(flatten)]
    pub extra: Extra,
}

impl State {
    /// Keys checked, in order, when creating a state.
    pub const REQUIRED_ON_CREATE: &'static [&'static str] = &["name"];

    /// Keys silently dropped from update payloads, on top of the reserved ones.
    pub const IGNORED_ON_UPDATE: &'static [&'static str] = &[];

    /// Create a builder for constructing a [`State`].
    #[must_use]
    pub fn builder() -> StateBuilder {
        StateBuilder::default()
    }

    /// Build a new state from a client payload.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] if `name` is absent, or
    /// [`ValidationError::InvalidField`] if it is not a string.
    pub fn from_payload(payload: Payload) -> Result<Self, ValidationError> {
        payload.require(Self::REQUIRED_ON_CREATE)?;
        let mut payload = payload.without(&[]);
        let name: String = payload.take_required("name", "string")?;

        Ok(Self::builder()
            .name(name)
            .extra(payload.into_extra())
            .build())
    }

    /// Merge an update payload into this state and refresh `updated_at`.
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] if `name` is not a string.
    pub fn merge(&mut self, payload: Payload) -> Result<(), ValidationError> {
        let mut payload = payload.without(Self::IGNORED_ON_UPDATE);
        let name: Option<String> = payload.take("name", "string")?;

        if let Some(name) = name {
            self.name = name;
        }
        self.extra.extend(payload.into_extra());
        self.updated_at = time::now();
        Ok(())
    }
}

/// Step-by-step builder for [`State`].
#[derive(Debug, Default)]
pub struct StateBuilder {
    id: Option<StateId>,
    name: Option<String>,
    extra: Extra,
}

impl StateBuilder {
    #[must_use]
    pub fn id(mut self, id: StateId) -> Self {
        self.id = Some(id);
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

    /// Consume the builder and stamp both timestamps with the same instant.
    #[must_use]
    pub fn build(self) -> State {
        let now = time::now();
        State {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            extra: self.extra,
        }
    }
}
