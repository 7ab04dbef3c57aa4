//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// The store is a plain CRUD surface: create, exact-key lookup, truncate.
/// Implementations must enforce email uniqueness at insert time and
/// surface a duplicate as [`DomainError::Conflict`]; the service-level
/// pre-check is advisory only.
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Insert a new user. Duplicate emails fail with `Conflict`.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Exact-match lookup; emails compare case-sensitively as stored.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;

    /// Remove every user. Test and ops tooling only.
    async fn truncate(&self) -> Result<(), DomainError>;

    /// Check whether an email is already taken
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }
}
