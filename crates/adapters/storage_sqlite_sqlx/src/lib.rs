//! # hbnb-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hbnb-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod codec;
pub mod error;
pub mod place_repo;
pub mod pool;
pub mod review_repo;
pub mod state_repo;
pub mod user_repo;

pub use error::StorageError;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
pub use review_repo::SqliteReviewRepository;
pub use state_repo::SqliteStateRepository;
pub use user_repo::SqliteUserRepository;
