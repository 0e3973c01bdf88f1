//! Serializable data transfer objects shared by every API endpoint.
//!
//! These types fix the exact JSON projection of each resource. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;
