//! Domain & parameter models for user operations
//!
//! The domain `User` deliberately has no password field, so no code path from a
//! repository to a response can leak it.

use std::fmt;

use crate::model::user::{CreateUserDto, UserDto};

/// The user domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
}

impl User {
    /// Converts an entity model to the user domain model, dropping the stored password
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
        }
    }

    /// Converts the user domain model into its public DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
        }
    }
}

/// A password exactly as the client sent it.
///
/// Passwords are persisted as-is; this wrapper only keeps the raw value out of
/// `Debug` output and logs. Take it out with `into_inner`.
#[derive(Clone, PartialEq, Eq)]
pub struct UnsafePlaintextPassword(String);

impl UnsafePlaintextPassword {
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for UnsafePlaintextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UnsafePlaintextPassword(<redacted>)")
    }
}

/// Parameters for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password: UnsafePlaintextPassword,
    pub is_active: bool,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            email: dto.email,
            password: UnsafePlaintextPassword::new(dto.password),
            is_active: dto.is_active,
        }
    }
}
