//! Domain layer - Core business logic and entities

pub mod error;
pub mod i18n;
pub mod user;

pub use error::DomainError;
pub use i18n::{message, Locale, MessageKey};
pub use user::{validate, Field, RegistrationRequest, User, UserRepository, ValidationErrorSet};
