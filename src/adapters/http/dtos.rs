use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::accounts::entities::User;

/// Request for user registration
///
/// Fields are optional at the serde level so that a missing field is reported
/// with the same message as an empty one. `nome`/`senha` are accepted for
/// older clients; when both spellings are sent the English key wins.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(from = "RegisterRequestBody")]
pub struct RegisterRequest {
  #[validate(
    required(message = "Name, email and password are required"),
    length(min = 1, message = "Name, email and password are required")
  )]
  pub name: Option<String>,

  #[validate(
    required(message = "Name, email and password are required"),
    length(min = 1, message = "Name, email and password are required")
  )]
  pub email: Option<String>,

  #[validate(
    required(message = "Name, email and password are required"),
    length(min = 1, message = "Name, email and password are required")
  )]
  pub password: Option<String>,
}

#[derive(Deserialize)]
struct RegisterRequestBody {
  name: Option<String>,
  nome: Option<String>,
  email: Option<String>,
  password: Option<String>,
  senha: Option<String>,
}

impl From<RegisterRequestBody> for RegisterRequest {
  fn from(body: RegisterRequestBody) -> Self {
    Self {
      name: body.name.or(body.nome),
      email: body.email,
      password: body.password.or(body.senha),
    }
  }
}

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(from = "LoginRequestBody")]
pub struct LoginRequest {
  #[validate(
    required(message = "Email and password are required"),
    length(min = 1, message = "Email and password are required")
  )]
  pub email: Option<String>,

  #[validate(
    required(message = "Email and password are required"),
    length(min = 1, message = "Email and password are required")
  )]
  pub password: Option<String>,
}

#[derive(Deserialize)]
struct LoginRequestBody {
  email: Option<String>,
  password: Option<String>,
  senha: Option<String>,
}

impl From<LoginRequestBody> for LoginRequest {
  fn from(body: LoginRequestBody) -> Self {
    Self {
      email: body.email,
      password: body.password.or(body.senha),
    }
  }
}

/// Partial update of a user. Absent fields are left unchanged; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(from = "UpdateUserRequestBody")]
pub struct UpdateUserRequest {
  #[validate(length(min = 1, message = "name must not be empty"))]
  pub name: Option<String>,

  #[validate(length(min = 1, message = "email must not be empty"))]
  pub email: Option<String>,

  #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
  pub password: Option<String>,
}

#[derive(Deserialize)]
struct UpdateUserRequestBody {
  name: Option<String>,
  nome: Option<String>,
  email: Option<String>,
  password: Option<String>,
  senha: Option<String>,
}

impl From<UpdateUserRequestBody> for UpdateUserRequest {
  fn from(body: UpdateUserRequestBody) -> Self {
    Self {
      name: body.name.or(body.nome),
      email: body.email,
      password: body.password.or(body.senha),
    }
  }
}

/// Public view of a user; the password hash is never part of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      name: user.name,
      email: user.email,
      created_at: user.created_at,
      updated_at: user.updated_at,
    }
  }
}

/// Response after registration or login
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
  pub message: String,
  pub user: UserResponse,
  pub token: String,
}

/// Single user payload
#[derive(Debug, Clone, Serialize)]
pub struct UserEnvelope {
  pub user: UserResponse,
}

/// User list payload
#[derive(Debug, Clone, Serialize)]
pub struct UsersEnvelope {
  pub users: Vec<UserResponse>,
}

/// Liveness check payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  pub message: String,
  pub timestamp: DateTime<Utc>,
}

/// Standard error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Human-readable error message
  pub error: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  const REGISTRATION_FIELDS_REQUIRED: &str = "Name, email and password are required";
  const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";

  #[test]
  fn test_missing_field_messages() {
    let request = RegisterRequest {
      name: None,
      email: None,
      password: None,
    };
    let errors = request.validate().unwrap_err();
    for (_, field_errors) in errors.field_errors() {
      for error in field_errors {
        assert_eq!(
          error.message.as_deref(),
          Some(REGISTRATION_FIELDS_REQUIRED)
        );
      }
    }

    let request = LoginRequest {
      email: Some(String::new()),
      password: None,
    };
    let errors = request.validate().unwrap_err();
    for (_, field_errors) in errors.field_errors() {
      for error in field_errors {
        assert_eq!(error.message.as_deref(), Some(LOGIN_FIELDS_REQUIRED));
      }
    }
  }

  #[test]
  fn test_register_request_validation_valid() {
    let request = RegisterRequest {
      name: Some("Ana".to_string()),
      email: Some("ana@example.com".to_string()),
      password: Some("123".to_string()),
    };

    // password length is a domain rule, checked after presence
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_register_request_empty_field() {
    let request = RegisterRequest {
      name: Some(String::new()),
      email: Some("ana@example.com".to_string()),
      password: Some("secret123".to_string()),
    };

    assert!(request.validate().is_err());
  }

  #[test]
  fn test_register_request_accepts_portuguese_aliases() {
    let json = r#"{"nome": "Ana", "email": "ana@example.com", "senha": "secret123"}"#;
    let request: RegisterRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.name.as_deref(), Some("Ana"));
    assert_eq!(request.password.as_deref(), Some("secret123"));
  }

  #[test]
  fn test_english_key_wins_over_alias() {
    let json = r#"{"name": "Ana", "nome": "Ana Maria", "email": "ana@example.com", "password": "secret123", "senha": "outra-senha"}"#;
    let request: RegisterRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.name.as_deref(), Some("Ana"));
    assert_eq!(request.password.as_deref(), Some("secret123"));

    let json = r#"{"email": "ana@example.com", "password": "secret123", "senha": "outra-senha"}"#;
    let request: LoginRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.password.as_deref(), Some("secret123"));

    let json = r#"{"nome": "Ana Maria", "senha": "outra-senha"}"#;
    let request: UpdateUserRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.name.as_deref(), Some("Ana Maria"));
    assert_eq!(request.password.as_deref(), Some("outra-senha"));
  }

  #[test]
  fn test_missing_fields_deserialize_as_none() {
    let request: LoginRequest = serde_json::from_str("{}").unwrap();

    assert!(request.email.is_none());
    assert!(request.validate().is_err());
  }

  #[test]
  fn test_update_request_ignores_unknown_fields() {
    let json = r#"{"name": "Ana", "id": "ignored", "created_at": "ignored"}"#;
    let request: UpdateUserRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.name.as_deref(), Some("Ana"));
    assert!(request.email.is_none());
    assert!(request.validate().is_ok());
  }

  #[test]
  fn test_user_response_has_no_password() {
    let user = User::new(
      "Ana".to_string(),
      "ana@example.com".to_string(),
      "$argon2id$hash".to_string(),
    );

    let json = serde_json::to_value(UserResponse::from(user)).unwrap();

    assert!(json.get("password").is_none());
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "ana@example.com");
  }
}
