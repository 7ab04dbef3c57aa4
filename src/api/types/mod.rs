//! API types
//!
//! Response shapes and extractors for the registration endpoint.

pub mod error;
pub mod json;
pub mod locale;

pub use error::{ApiError, LocalizedErrors};
pub use json::Json;
pub use locale::AcceptLanguage;
