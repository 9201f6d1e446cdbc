//! State service — use-cases for managing states.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::StateId;
use hbnb_domain::payload::Payload;
use hbnb_domain::state::State;

use crate::ports::StateRepository;

/// Application service for state CRUD operations.
pub struct StateService<R> {
    repo: R,
}

impl<R: StateRepository> StateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a state from a client payload.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `name` is missing or mistyped, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_state(&self, payload: Payload) -> Result<State, HbnbError> {
        let state = State::from_payload(payload)?;
        self.repo.create(state).await
    }

    /// Look up a state by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no state with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_state(&self, id: &StateId) -> Result<State, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "State",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_states(&self) -> Result<Vec<State>, HbnbError> {
        self.repo.get_all().await
    }

    /// Count stored states.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_states(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }

    /// Merge a client payload into a state already loaded with
    /// [`get_state`](Self::get_state).
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if a known field is mistyped,
    /// [`HbnbError::NotFound`] if the state was deleted in the meantime, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all, fields(id = %state.id))]
    pub async fn update_state(
        &self,
        mut state: State,
        payload: Payload,
    ) -> Result<State, HbnbError> {
        state.merge(payload)?;
        self.repo.update(state).await
    }

    /// Delete a state by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the state does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_state(&self, id: &StateId) -> Result<(), HbnbError> {
        self.repo.delete(id).await
    }
}
