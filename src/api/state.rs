//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::{RegistrationRequest, User};
use crate::domain::DomainError;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub registration_service: Arc<dyn RegistrationServiceTrait>,
}

/// Trait for registration service operations
#[async_trait]
pub trait RegistrationServiceTrait: Send + Sync {
    async fn register(&self, request: RegistrationRequest) -> Result<User, DomainError>;
}
