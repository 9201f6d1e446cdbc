//! User service — use-cases for managing users.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::payload::Payload;
use hbnb_domain::user::User;

use crate::ports::UserRepository;

/// Application service for user CRUD operations.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a user from a client payload.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if `email` or `password` is missing
    /// or mistyped, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, payload))]
    pub async fn create_user(&self, payload: Payload) -> Result<User, HbnbError> {
        let user = User::from_payload(payload)?;
        self.repo.create(user).await
    }

    /// Look up a user by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no user with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: &UserId) -> Result<User, HbnbError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "User",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<User>, HbnbError> {
        self.repo.get_all().await
    }

    /// Count stored users.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn count_users(&self) -> Result<u64, HbnbError> {
        self.repo.count().await
    }

    /// Merge a client payload into a user already loaded with
    /// [`get_user`](Self::get_user). `email` never
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Validation`] if a known field is mistyped,
    /// [`HbnbError::NotFound`] if the user was deleted in the meantime, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all, fields(id = %user.id))]
    pub async fn update_user(&self, mut user: User, payload: Payload) -> Result<User, HbnbError> {
        user.merge(payload)?;
        self.repo.update(user).await
    }

    /// Delete a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] if the user does not exist, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: &UserId) -> Result<(), HbnbError> {
        self.repo.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemory;
    use hbnb_domain::error::ValidationError;
    use serde_json::json;

    fn make_service() -> (UserService<InMemory<User>>, InMemory<User>) {
        let repo = InMemory::default();
        (UserService::new(repo.clone()), repo)
    }

    fn payload(value: serde_json::Value) -> Payload {
        Payload::from_value(value).unwrap()
    }

    async fn seed(svc: &UserService<InMemory<User>>) -> User {
        svc.create_user(payload(json!({ "email": "old@hbnb.io", "password": "pw" })))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_user_when_email_and_password_present() {
        let (svc, repo) = make_service();
        let user = seed(&svc).await;
        assert_eq!(user.email, "old@hbnb.io");
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn should_not_store_anything_when_password_missing() {
        let (svc, repo) = make_service();

        let result = svc
            .create_user(payload(json!({ "email": "a@hbnb.io" })))
            .await;

        assert!(matches!(
            result,
            Err(HbnbError::Validation(ValidationError::MissingField("password")))
        ));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn should_ignore_id_and_email_on_update() {
        let (svc, _) = make_service();
        let user = seed(&svc).await;

        let updated = svc
            .update_user(
                user.clone(),
                payload(json!({ "id": "x", "email": "new@x.com" })),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, user.id);
        assert_eq!(updated.email, "old@hbnb.io");
        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched.email, "old@hbnb.io");
    }

    #[tokio::test]
    async fn should_update_password() {
        let (svc, _) = make_service();
        let user = seed(&svc).await;

        let user = svc.get_user(&user.id).await.unwrap();
        svc.update_user(user.clone(), payload(json!({ "password": "secret" })))
            .await
            .unwrap();

        let fetched = svc.get_user(&user.id).await.unwrap();
        assert_eq!(fetched.password, "secret");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_user() {
        let (svc, _) = make_service();
        let result = svc.delete_user(&UserId::from("ghost")).await;
        assert!(matches!(result, Err(HbnbError::NotFound(_))));
    }
}
