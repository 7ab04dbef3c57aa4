//! User infrastructure module
//!
//! This module provides the registration service and its collaborators:
//! Argon2 password hashing, activation token generation, and the
//! in-memory and PostgreSQL repositories.

mod password;
mod postgres_repository;
mod repository;
mod service;
mod token;

pub use password::{Argon2Hasher, PasswordHasher};
pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::RegistrationService;
pub use token::ActivationTokenGenerator;
