//! Message localization
//!
//! Error identity is a [`MessageKey`]; display text lives in a per-locale
//! table. Unknown locales and missing translations fall back to English
//! silently, never with an error. The locale only ever affects message
//! text, not validation behavior.

use serde::{Deserialize, Serialize};

/// Message keys produced by validation and registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    UsernameNull,
    UsernameSize,
    EmailNull,
    EmailInvalid,
    EmailInUse,
    PasswordNull,
    PasswordSize,
    PasswordPattern,
    RegistrationSuccess,
}

impl MessageKey {
    /// Stable dotted key, useful for logging and client-side mapping
    pub fn key(&self) -> &'static str {
        match self {
            Self::UsernameNull => "username.null",
            Self::UsernameSize => "username.size",
            Self::EmailNull => "email.null",
            Self::EmailInvalid => "email.invalid",
            Self::EmailInUse => "email.inUse",
            Self::PasswordNull => "password.null",
            Self::PasswordSize => "password.size",
            Self::PasswordPattern => "password.pattern",
            Self::RegistrationSuccess => "registration.success",
        }
    }
}

/// Caller-selected language for response messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Parse a single language tag such as `es` or `es-AR`.
    /// Unrecognized tags yield `None`.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or("");

        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Parse an `Accept-Language` header value. The first recognized tag
    /// wins; a header with no recognized tag falls back to the default.
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .find_map(Self::from_language_tag)
            .unwrap_or_default()
    }
}

/// Resolve a message key to display text for the requested locale
pub fn message(key: MessageKey, locale: Locale) -> &'static str {
    match locale {
        Locale::En => english(key),
        Locale::Es => spanish(key).unwrap_or_else(|| english(key)),
    }
}

fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UsernameNull => "Username cannot be null",
        MessageKey::UsernameSize => "It must have minimum 4 and maximum 32 characters",
        MessageKey::EmailNull => "E-mail cannot be null",
        MessageKey::EmailInvalid => "Looks like an invalid e-mail",
        MessageKey::EmailInUse => "E-mail in use",
        MessageKey::PasswordNull => "Password cannot be null",
        MessageKey::PasswordSize => "Password must be at least 6 characters",
        MessageKey::PasswordPattern => {
            "Password must have at least one uppercase, one lowercase letter and one number"
        }
        MessageKey::RegistrationSuccess => "User saved",
    }
}

fn spanish(key: MessageKey) -> Option<&'static str> {
    match key {
        MessageKey::UsernameNull => Some("El nombre de usuario no puede ser nulo"),
        MessageKey::UsernameSize => Some("Debe tener minimo 4 y maximo 32 caracteres"),
        MessageKey::EmailNull => Some("El correo electronico no puede ser nulo"),
        MessageKey::EmailInvalid => Some("Parece un correo electronico invalido"),
        MessageKey::EmailInUse => Some("Este correo electronico ya esta en uso"),
        MessageKey::PasswordNull => Some("La contrasena no puede ser nula"),
        MessageKey::PasswordSize => Some("La contrasena debe tener al menos 6 caracteres"),
        MessageKey::PasswordPattern => {
            Some("La contrasena debe tener al menos una mayuscula, una minuscula y un numero")
        }
        MessageKey::RegistrationSuccess => Some("Usuario guardado"),
    }
}
