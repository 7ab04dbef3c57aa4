//! User registration endpoint

use axum::extract::State;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::types::{AcceptLanguage, ApiError, Json};
use crate::domain::user::RegistrationRequest;
use crate::domain::{message, MessageKey};

/// Successful registration response
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub message: String,
}

/// Register a new user
///
/// POST /api/1.0/users
///
/// Returns 200 with a localized success message, or 400 with a
/// `validationErrors` map keyed by failing field. The `Accept-Language`
/// header selects the message locale; it never changes which fields fail.
pub async fn register(
    State(state): State<AppState>,
    AcceptLanguage(locale): AcceptLanguage,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    state
        .registration_service
        .register(request)
        .await
        .map_err(|e| ApiError::from_domain(e, locale))?;

    Ok(Json(RegistrationResponse {
        message: message(MessageKey::RegistrationSuccess, locale).to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::router::create_router_with_state;
    use crate::api::state::AppState;
    use crate::domain::user::{MockUserRepository, UserRepository};
    use crate::infrastructure::notification::mock::RecordingNotificationSink;
    use crate::infrastructure::user::{
        ActivationTokenGenerator, Argon2Hasher, RegistrationService,
    };

    struct TestApp {
        router: axum::Router,
        repository: Arc<MockUserRepository>,
        sink: Arc<RecordingNotificationSink>,
    }

    fn test_app() -> TestApp {
        let repository = Arc::new(MockUserRepository::new());
        let sink = Arc::new(RecordingNotificationSink::new());

        let service = RegistrationService::new(
            Arc::clone(&repository),
            Arc::new(Argon2Hasher::with_cost(8, 1, 1).unwrap()),
            ActivationTokenGenerator::new(),
            Arc::clone(&sink),
            Duration::from_millis(200),
        );

        let state = AppState {
            registration_service: Arc::new(service),
        };

        TestApp {
            router: create_router_with_state(state),
            repository,
            sink,
        }
    }

    fn post_users(body: Value, locale: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/1.0/users")
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(locale) = locale {
            builder = builder.header(header::ACCEPT_LANGUAGE, locale);
        }

        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn valid_body() -> Value {
        json!({
            "username": "user1",
            "email": "user1@mail.com",
            "password": "passworD987654",
        })
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_register_valid_user_returns_200_with_message() {
        let app = test_app();

        let response = app.router.oneshot(post_users(valid_body(), None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User saved");
    }

    #[tokio::test]
    async fn test_register_persists_user_with_hashed_password() {
        let app = test_app();

        app.router.oneshot(post_users(valid_body(), None)).await.unwrap();

        assert_eq!(app.repository.count().await.unwrap(), 1);
        let stored = app
            .repository
            .find_by_email("user1@mail.com")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password_hash(), "passworD987654");
    }

    #[tokio::test]
    async fn test_register_dispatches_activation_notification() {
        let app = test_app();

        app.router.oneshot(post_users(valid_body(), None)).await.unwrap();

        let sent = app.sink.sent().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "user1@mail.com");
        assert_eq!(sent[0].1.len(), 16);
    }

    #[tokio::test]
    async fn test_missing_fields_return_400_with_null_messages() {
        let app = test_app();

        let response = app
            .router
            .oneshot(post_users(json!({}), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        let errors = &body["validationErrors"];

        assert_eq!(errors["username"], "Username cannot be null");
        assert_eq!(errors["email"], "E-mail cannot be null");
        assert_eq!(errors["password"], "Password cannot be null");
    }

    #[tokio::test]
    async fn test_only_failing_fields_are_reported_in_check_order() {
        let app = test_app();

        let body = json!({
            "username": null,
            "email": null,
            "password": "passworD987654",
        });
        let response = app.router.oneshot(post_users(body, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes_body = body_json(response).await;
        let errors = bytes_body["validationErrors"].as_object().unwrap();

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("username"));
        assert!(errors.contains_key("email"));
        assert!(!errors.contains_key("password"));

        // Raw body preserves the check order
        let raw = bytes_body.to_string();
        let username_pos = raw.find("username").unwrap();
        let email_pos = raw.find("email").unwrap();
        assert!(username_pos < email_pos);
    }

    #[tokio::test]
    async fn test_duplicate_registration_returns_email_in_use() {
        let app = test_app();

        let first = app
            .router
            .clone()
            .oneshot(post_users(valid_body(), None))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let second = app
            .router
            .oneshot(post_users(valid_body(), None))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);

        let body = body_json(second).await;
        assert_eq!(body["validationErrors"]["email"], "E-mail in use");
        assert_eq!(app.repository.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_spanish_locale_localizes_every_message() {
        let app = test_app();

        let response = app
            .router
            .clone()
            .oneshot(post_users(json!({}), Some("es")))
            .await
            .unwrap();

        let body = body_json(response).await;
        let errors = &body["validationErrors"];
        assert_eq!(errors["username"], "El nombre de usuario no puede ser nulo");
        assert_eq!(errors["email"], "El correo electronico no puede ser nulo");
        assert_eq!(errors["password"], "La contrasena no puede ser nula");

        let success = app
            .router
            .oneshot(post_users(valid_body(), Some("es")))
            .await
            .unwrap();
        let body = body_json(success).await;
        assert_eq!(body["message"], "Usuario guardado");
    }

    #[tokio::test]
    async fn test_unknown_locale_falls_back_to_english() {
        let app = test_app();

        let response = app
            .router
            .oneshot(post_users(valid_body(), Some("fr")))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["message"], "User saved");
    }

    #[tokio::test]
    async fn test_storage_failure_returns_500_not_email_in_use() {
        let app = test_app();
        app.repository.set_should_fail(true).await;

        let response = app.router.oneshot(post_users(valid_body(), None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body.get("validationErrors").is_none());
        assert_eq!(body["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = test_app();

        let response = app
            .router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
