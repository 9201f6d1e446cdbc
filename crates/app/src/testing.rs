//! In-memory repositories shared by the service unit tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{PlaceId, ReviewId, StateId, UserId};
use hbnb_domain::place::Place;
use hbnb_domain::review::Review;
use hbnb_domain::state::State;
use hbnb_domain::user::User;

use crate::ports::{PlaceRepository, ReviewRepository, StateRepository, UserRepository};

/// Insertion-ordered store. Clones share the same rows.
pub(crate) struct InMemory<T> {
    rows: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for InMemory<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Clone for InMemory<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Clone> InMemory<T> {
    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn insert(&self, row: T) -> T {
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.lock().unwrap().iter().find(|row| pred(row)).cloned()
    }

    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    fn replace(&self, row: T, pred: impl Fn(&T) -> bool) -> Option<T> {
        let mut rows = self.rows.lock().unwrap();
        let slot = rows.iter_mut().find(|slot| pred(slot))?;
        *slot = row.clone();
        Some(row)
    }

    fn remove(&self, pred: impl Fn(&T) -> bool) -> bool {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| !pred(row));
        rows.len() < before
    }
}

fn missing(entity: &'static str, id: impl ToString) -> HbnbError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}

macro_rules! in_memory_repo {
    ($trait:ident, $ty:ty, $id:ty, $entity:literal { $($extra:tt)* }) => {
        impl $trait for InMemory<$ty> {
            fn create(&self, row: $ty) -> impl Future<Output = Result<$ty, HbnbError>> + Send {
                let row = self.insert(row);
                async { Ok(row) }
            }

            fn get_by_id(
                &self,
                id: &$id,
            ) -> impl Future<Output = Result<Option<$ty>, HbnbError>> + Send {
                let row = self.find(|row| &row.id == id);
                async { Ok(row) }
            }

            fn get_all(&self) -> impl Future<Output = Result<Vec<$ty>, HbnbError>> + Send {
                let rows = self.filter(|_| true);
                async { Ok(rows) }
            }

            fn count(&self) -> impl Future<Output = Result<u64, HbnbError>> + Send {
                let count = self.len() as u64;
                async move { Ok(count) }
            }

            fn update(&self, row: $ty) -> impl Future<Output = Result<$ty, HbnbError>> + Send {
                let id = row.id.clone();
                let result = self
                    .replace(row, |slot| slot.id == id)
                    .ok_or_else(|| missing($entity, &id));
                async { result }
            }

            fn delete(&self, id: &$id) -> impl Future<Output = Result<(), HbnbError>> + Send {
                let result = if self.remove(|row| &row.id == id) {
                    Ok(())
                } else {
                    Err(missing($entity, id))
                };
                async { result }
            }

            $($extra)*
        }
    };
}

in_memory_repo!(StateRepository, State, StateId, "State" {});
in_memory_repo!(UserRepository, User, UserId, "User" {});
in_memory_repo!(PlaceRepository, Place, PlaceId, "Place" {});
in_memory_repo!(ReviewRepository, Review, ReviewId, "Review" {
    fn find_by_place(
        &self,
        place_id: &PlaceId,
    ) -> impl Future<Output = Result<Vec<Review>, HbnbError>> + Send {
        let rows = self.filter(|row| &row.place_id == place_id);
        async { Ok(rows) }
    }
});
