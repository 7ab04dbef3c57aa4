//! Registration service
//!
//! Orchestrates one atomic register operation: validate, uniqueness
//! pre-check, credential hashing and token issuance, persist, notify.
//! Transitions are strictly sequential per request with no internal
//! retries; a success creates exactly one row and attempts exactly one
//! dispatch.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::api::state::RegistrationServiceTrait;
use crate::domain::user::{validate, Field, RegistrationRequest, User, ValidationErrorSet};
use crate::domain::{DomainError, MessageKey, UserRepository};
use crate::infrastructure::notification::NotificationSink;

use super::password::PasswordHasher;
use super::token::ActivationTokenGenerator;

/// Registration service wiring validation, hashing, persistence and
/// notification dispatch together
#[derive(Debug)]
pub struct RegistrationService<R, H, N>
where
    R: UserRepository,
    H: PasswordHasher,
    N: NotificationSink,
{
    repository: Arc<R>,
    hasher: Arc<H>,
    tokens: ActivationTokenGenerator,
    notifications: Arc<N>,
    notification_timeout: Duration,
}

impl<R, H, N> RegistrationService<R, H, N>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
    N: NotificationSink,
{
    pub fn new(
        repository: Arc<R>,
        hasher: Arc<H>,
        tokens: ActivationTokenGenerator,
        notifications: Arc<N>,
        notification_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            hasher,
            tokens,
            notifications,
            notification_timeout,
        }
    }

    /// Register a new user
    ///
    /// Field errors are aggregated into one `Validation` error. The
    /// uniqueness pre-check runs only on a syntactically valid request;
    /// the store's unique constraint remains the authoritative guard, and
    /// a conflict at insert time is reported the same way.
    pub async fn register(&self, request: RegistrationRequest) -> Result<User, DomainError> {
        let errors = validate(&request);
        if !errors.is_empty() {
            return Err(DomainError::validation(errors));
        }

        let RegistrationRequest {
            username: Some(username),
            email: Some(email),
            password: Some(password),
        } = request
        else {
            return Err(DomainError::internal("Validated request is missing fields"));
        };

        // Advisory fast path; the insert below is what actually decides.
        if self.repository.email_exists(&email).await? {
            return Err(email_in_use());
        }

        let password_hash = self.hash_password(password).await?;
        let token = self.tokens.generate();

        let user = User::new(username, email, password_hash, token.clone());

        let user = match self.repository.create(user).await {
            Ok(user) => user,
            // A concurrent registration won the race between the
            // pre-check and the insert.
            Err(DomainError::Conflict { .. }) => return Err(email_in_use()),
            Err(e) => return Err(e),
        };

        self.dispatch_activation(user.email(), &token).await;

        debug!(user_id = %user.id(), "user registered");

        Ok(user)
    }

    /// Argon2 is CPU-bound; run it off the async workers so hashing never
    /// stalls other requests.
    async fn hash_password(&self, password: String) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
    }

    /// Best-effort dispatch, bounded by the configured timeout. A failure
    /// or timeout is logged and the registration still succeeds.
    async fn dispatch_activation(&self, email: &str, token: &str) {
        let dispatch = self.notifications.send_activation(email, token);

        match tokio::time::timeout(self.notification_timeout, dispatch).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!(email, error = %e, "activation dispatch failed; user was still created");
            }
            Err(_) => {
                warn!(
                    email,
                    timeout_ms = self.notification_timeout.as_millis() as u64,
                    "activation dispatch timed out; user was still created"
                );
            }
        }
    }
}

fn email_in_use() -> DomainError {
    DomainError::validation(ValidationErrorSet::single(Field::Email, MessageKey::EmailInUse))
}

#[async_trait]
impl<R, H, N> RegistrationServiceTrait for RegistrationService<R, H, N>
where
    R: UserRepository,
    H: PasswordHasher + 'static,
    N: NotificationSink,
{
    async fn register(&self, request: RegistrationRequest) -> Result<User, DomainError> {
        Self::register(self, request).await
    }
}
