//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Existence Checks**: Rejecting writes whose referenced rows are missing before they
//!   reach the database
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running the favorites workflow inside a transaction

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
