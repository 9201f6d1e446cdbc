//! # hbnb-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `StateRepository`, `UserRepository`, `PlaceRepository`,
//!     `ReviewRepository` — persistence for each record type
//! - Define **driving/inbound ports** as use-case structs:
//!   - `StateService`, `UserService`, `PlaceService`, `ReviewService` —
//!     list, get, create, update, delete
//! - Enforce cross-record rules (a review's place and author must exist)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
