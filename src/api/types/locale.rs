//! Accept-Language extractor

use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

use crate::domain::Locale;

/// Extracts the response locale from the `Accept-Language` header
///
/// Missing, malformed, or unrecognized headers fall back to the default
/// locale; this extractor never rejects a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptLanguage(pub Locale);

impl<S> FromRequestParts<S> for AcceptLanguage
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(axum::http::header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Locale::from_accept_language)
            .unwrap_or_default();

        Ok(Self(locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Locale {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header("Accept-Language", value);
        }
        let (mut parts, ()) = builder.body(()).unwrap().into_parts();

        let AcceptLanguage(locale) = AcceptLanguage::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        locale
    }

    #[tokio::test]
    async fn test_missing_header_is_default_locale() {
        assert_eq!(extract(None).await, Locale::En);
    }

    #[tokio::test]
    async fn test_spanish_header() {
        assert_eq!(extract(Some("es")).await, Locale::Es);
        assert_eq!(extract(Some("es-AR,es;q=0.9")).await, Locale::Es);
    }

    #[tokio::test]
    async fn test_unknown_header_falls_back() {
        assert_eq!(extract(Some("fr")).await, Locale::En);
        assert_eq!(extract(Some("not a header")).await, Locale::En);
    }
}
