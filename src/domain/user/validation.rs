//! Registration input validation
//!
//! Rules run per field in declaration order: username, email, password.
//! The first failing rule for a field wins and later rules for that field
//! are skipped, while the remaining fields are still checked, so one
//! response reports every failing field. Input is taken as-is; no
//! whitespace trimming is performed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::domain::i18n::MessageKey;

use super::entity::RegistrationRequest;

pub const USERNAME_MIN_LENGTH: usize = 4;
pub const USERNAME_MAX_LENGTH: usize = 32;
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Local part, `@`, then a dot-delimited domain. Deliberately loose beyond
/// that; full RFC 5322 parsing buys nothing here.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$").expect("email pattern is valid"));

/// Validated fields, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered field -> message-key mapping
///
/// Non-empty only on failure. At most one entry per field; insertion
/// order equals check order and is preserved when enumerated or
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrorSet {
    entries: Vec<(Field, MessageKey)>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A set holding exactly one failure
    pub fn single(field: Field, key: MessageKey) -> Self {
        Self {
            entries: vec![(field, key)],
        }
    }

    /// Record a failure for a field. A field that already failed keeps its
    /// first message.
    pub fn insert(&mut self, field: Field, key: MessageKey) {
        if !self.entries.iter().any(|(f, _)| *f == field) {
            self.entries.push((field, key));
        }
    }

    pub fn get(&self, field: Field) -> Option<MessageKey> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, key)| *key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, MessageKey)> + '_ {
        self.entries.iter().copied()
    }

    /// Failing fields in check order
    pub fn fields(&self) -> Vec<Field> {
        self.entries.iter().map(|(field, _)| *field).collect()
    }
}

/// Validate a registration request, collecting at most one message key per
/// failing field. An empty result means the request is valid.
pub fn validate(request: &RegistrationRequest) -> ValidationErrorSet {
    let mut errors = ValidationErrorSet::new();

    match request.username.as_deref() {
        None | Some("") => errors.insert(Field::Username, MessageKey::UsernameNull),
        Some(username) => {
            let length = username.chars().count();
            if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
                errors.insert(Field::Username, MessageKey::UsernameSize);
            }
        }
    }

    match request.email.as_deref() {
        None | Some("") => errors.insert(Field::Email, MessageKey::EmailNull),
        Some(email) => {
            if !EMAIL_RE.is_match(email) {
                errors.insert(Field::Email, MessageKey::EmailInvalid);
            }
        }
    }

    match request.password.as_deref() {
        None | Some("") => errors.insert(Field::Password, MessageKey::PasswordNull),
        Some(password) => {
            if password.chars().count() < PASSWORD_MIN_LENGTH {
                errors.insert(Field::Password, MessageKey::PasswordSize);
            } else if !has_required_classes(password) {
                errors.insert(Field::Password, MessageKey::PasswordPattern);
            }
        }
    }

    errors
}

fn has_required_classes(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}
