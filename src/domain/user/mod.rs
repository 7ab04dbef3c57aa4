//! User domain
//!
//! This module provides the registration input and user entity types,
//! field validation, and the repository trait the service persists
//! through.

mod entity;
mod repository;
mod validation;

pub use entity::{RegistrationRequest, User};
pub use repository::UserRepository;
pub use validation::{
    validate, Field, ValidationErrorSet, PASSWORD_MIN_LENGTH, USERNAME_MAX_LENGTH,
    USERNAME_MIN_LENGTH,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
