//! HTTP controller endpoints for the holocron API.
//!
//! One module per resource. Controllers extract path parameters and JSON bodies,
//! convert DTOs into operation parameters, call the matching service, and convert the
//! returned domain models back into DTOs. Every handler carries a `utoipa::path`
//! annotation so the router can assemble the OpenAPI document.

pub mod character;
pub mod extract;
pub mod favorite;
pub mod film;
pub mod index;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
