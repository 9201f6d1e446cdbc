//! # hbnb-domain
//!
//! Pure domain model for the hbnb listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **States**, **Users**, **Places** and **Reviews**
//! - Turn client payloads into records (required keys, types) and merge
//!   update payloads into existing records (per-type ignore-lists)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod payload;
pub mod time;

pub mod place;
pub mod review;
pub mod state;
pub mod user;
