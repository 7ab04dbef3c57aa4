//! Activation notification dispatch
//!
//! The transport is an external collaborator; the service hands it an
//! (email, token) pair and moves on. Delivery is best effort by policy: a
//! failed or timed-out dispatch is logged at WARN and the created account
//! stands, so delivery problems never roll back a sign-up.

use async_trait::async_trait;
use std::fmt::Debug;
use tracing::info;

use crate::domain::DomainError;

/// Sink receiving activation messages for freshly created accounts
#[async_trait]
pub trait NotificationSink: Send + Sync + Debug {
    /// Dispatch an activation message carrying the account's token
    async fn send_activation(&self, email: &str, token: &str) -> Result<(), DomainError>;
}

/// Sink that logs the activation token instead of delivering it
///
/// Stands in for a real mail transport in development and in the default
/// serve wiring.
#[derive(Debug, Clone, Default)]
pub struct LoggingNotificationSink;

impl LoggingNotificationSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSink for LoggingNotificationSink {
    async fn send_activation(&self, email: &str, token: &str) -> Result<(), DomainError> {
        info!(email, token, "activation message dispatched");
        Ok(())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::RwLock;

    /// Sink that records every dispatch for later assertions
    #[derive(Debug, Default)]
    pub struct RecordingNotificationSink {
        sent: Arc<RwLock<Vec<(String, String)>>>,
    }

    impl RecordingNotificationSink {
        pub fn new() -> Self {
            Self::default()
        }

        /// (email, token) pairs in dispatch order
        pub async fn sent(&self) -> Vec<(String, String)> {
            self.sent.read().await.clone()
        }
    }

    #[async_trait]
    impl NotificationSink for RecordingNotificationSink {
        async fn send_activation(&self, email: &str, token: &str) -> Result<(), DomainError> {
            self.sent
                .write()
                .await
                .push((email.to_string(), token.to_string()));
            Ok(())
        }
    }

    /// Sink that always fails
    #[derive(Debug, Default)]
    pub struct FailingNotificationSink;

    #[async_trait]
    impl NotificationSink for FailingNotificationSink {
        async fn send_activation(&self, _email: &str, _token: &str) -> Result<(), DomainError> {
            Err(DomainError::notification("SMTP connection refused"))
        }
    }

    /// Sink that never completes within any reasonable test timeout
    #[derive(Debug, Default)]
    pub struct StalledNotificationSink;

    #[async_trait]
    impl NotificationSink for StalledNotificationSink {
        async fn send_activation(&self, _email: &str, _token: &str) -> Result<(), DomainError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }
}
