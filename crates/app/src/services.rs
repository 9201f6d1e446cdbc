//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod place_service;
pub mod review_service;
pub mod state_service;
pub mod user_service;

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::UserId;
use hbnb_domain::payload::Payload;

use crate::ports::UserRepository;

/// Check that the `user_id` read from a create payload names a stored user.
///
/// `None` stands for a `user_id` that is not a string, which matches nobody.
async fn ensure_user_exists<U: UserRepository>(
    users: &U,
    user_id: Option<&UserId>,
    payload: &Payload,
) -> Result<(), HbnbError> {
    if let Some(id) = user_id
        && users.get_by_id(id).await?.is_some()
    {
        return Ok(());
    }
    let id = payload
        .peek("user_id")
        .map(|value| value.as_str().map_or_else(|| value.to_string(), str::to_owned))
        .unwrap_or_default();
    Err(NotFoundError { entity: "User", id }.into())
}
