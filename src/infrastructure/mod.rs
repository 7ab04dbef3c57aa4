//! Infrastructure layer - External service implementations

pub mod logging;
pub mod notification;
pub mod user;
