use actix_web::{
  HttpResponse,
  error::{JsonPayloadError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::accounts::errors::AccountError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses
///
/// This is the only place where error kinds become status codes. Every
/// variant renders as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
  /// Malformed or missing input (400 Bad Request)
  Validation(String),

  /// Authentication or account state error
  Auth(AuthErrorKind),

  /// Unexpected failure (500 Internal Server Error). The text is logged,
  /// never sent to the client.
  Internal(String),
}

/// Account error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
  /// Unknown email or wrong password (401)
  InvalidCredentials,

  /// Email already registered (400)
  EmailAlreadyExists,

  /// No user with the requested id (404)
  UserNotFound,
}

impl AuthErrorKind {
  fn message(self) -> &'static str {
    match self {
      AuthErrorKind::InvalidCredentials => "Invalid email or password",
      AuthErrorKind::EmailAlreadyExists => "Email is already in use",
      AuthErrorKind::UserNotFound => "User not found",
    }
  }
}

impl ApiError {
  /// Client-facing message
  pub fn message(&self) -> String {
    match self {
      ApiError::Validation(msg) => msg.clone(),
      ApiError::Auth(kind) => kind.message().to_string(),
      ApiError::Internal(_) => "Internal server error".to_string(),
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Auth(kind) => write!(f, "Authentication error: {:?}", kind),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Auth(kind) => match kind {
        AuthErrorKind::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthErrorKind::EmailAlreadyExists => StatusCode::BAD_REQUEST,
        AuthErrorKind::UserNotFound => StatusCode::NOT_FOUND,
      },
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    if let ApiError::Internal(msg) = self {
      tracing::error!("Internal error: {}", msg);
    }

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse {
        error: self.message(),
      })
  }
}

/// Convert domain errors to API errors
impl From<AccountError> for ApiError {
  fn from(error: AccountError) -> Self {
    match error {
      AccountError::Validation(err) => ApiError::Validation(err.to_string()),
      AccountError::InvalidCredentials => ApiError::Auth(AuthErrorKind::InvalidCredentials),
      AccountError::EmailAlreadyExists => ApiError::Auth(AuthErrorKind::EmailAlreadyExists),
      AccountError::UserNotFound => ApiError::Auth(AuthErrorKind::UserNotFound),
      AccountError::Repository(err) => ApiError::Internal(err.to_string()),
      AccountError::Hash(err) => ApiError::Internal(err.to_string()),
      AccountError::Token(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
///
/// Fields sharing one message (e.g. "Name, email and password are required")
/// are reported once.
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let mut messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    messages.sort();
    messages.dedup();

    ApiError::Validation(messages.join(", "))
  }
}

/// Convert body extraction failures (bad JSON, wrong content type)
impl From<JsonPayloadError> for ApiError {
  fn from(error: JsonPayloadError) -> Self {
    tracing::debug!("Rejected request body: {}", error);
    ApiError::Validation("Invalid request body".to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::accounts::errors::{RepositoryError, ValidationError};
  use actix_web::body::to_bytes;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Auth(AuthErrorKind::InvalidCredentials).status_code(),
      StatusCode::UNAUTHORIZED
    );
    assert_eq!(
      ApiError::Auth(AuthErrorKind::EmailAlreadyExists).status_code(),
      StatusCode::BAD_REQUEST
    );
    assert_eq!(
      ApiError::Auth(AuthErrorKind::UserNotFound).status_code(),
      StatusCode::NOT_FOUND
    );
    assert_eq!(
      ApiError::Internal("test".to_string()).status_code(),
      StatusCode::INTERNAL_SERVER_ERROR
    );
  }

  #[test]
  fn test_account_error_conversion() {
    let api_error: ApiError = AccountError::InvalidCredentials.into();
    assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);

    let api_error: ApiError = AccountError::EmailAlreadyExists.into();
    assert_eq!(api_error.status_code(), StatusCode::BAD_REQUEST);

    let api_error: ApiError =
      AccountError::Validation(ValidationError::PasswordTooShort { min: 6 }).into();
    assert_eq!(api_error.message(), "Password must be at least 6 characters");
  }

  #[actix_web::test]
  async fn test_internal_error_text_is_not_exposed() {
    let api_error: ApiError = AccountError::Repository(RepositoryError::DatabaseError(
      "relation \"users\" does not exist".to_string(),
    ))
    .into();

    let response = api_error.error_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(response.into_body()).await.unwrap();
    let parsed: ErrorResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed.error, "Internal server error");
  }

  #[test]
  fn test_duplicate_validation_messages_are_merged() {
    use validator::Validate;

    let request = crate::adapters::http::dtos::RegisterRequest {
      name: None,
      email: Some(String::new()),
      password: None,
    };

    let api_error: ApiError = request.validate().unwrap_err().into();
    assert_eq!(api_error.message(), "Name, email and password are required");
  }

  #[actix_web::test]
  async fn test_error_body_is_only_the_message() {
    let response = ApiError::Auth(AuthErrorKind::UserNotFound).error_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = to_bytes(response.into_body()).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed, serde_json::json!({ "error": "User not found" }));
  }
}
