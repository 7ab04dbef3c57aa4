//! User entity and registration input types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied registration input
///
/// Carries no invariants of its own; it is the subject of validation.
/// Missing and explicitly-null fields are equivalent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Persisted user account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier, generated at creation
    id: Uuid,
    /// Display name, 4-32 characters
    username: String,
    /// Globally unique, stored and compared case-sensitively
    email: String,
    /// Argon2 password hash - never the plaintext, never serialized
    #[serde(skip_serializing)]
    password_hash: String,
    /// Opaque secret delivered out of band; present until activation
    #[serde(skip_serializing)]
    activation_token: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new inactive user holding its activation token
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        activation_token: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            activation_token: Some(activation_token.into()),
            active: false,
            created_at: Utc::now(),
        }
    }

    /// Rehydrate a user from stored columns
    pub fn from_parts(
        id: Uuid,
        username: String,
        email: String,
        password_hash: String,
        activation_token: Option<String>,
        active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            activation_token,
            active,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn activation_token(&self) -> Option<&str> {
        self.activation_token.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the account active and retire its token. The activation flow
    /// itself lives outside this subsystem; the field lifecycle starts
    /// here.
    pub fn activate(&mut self) {
        self.active = true;
        self.activation_token = None;
    }
}
