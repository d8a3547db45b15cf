use thiserror::Error;

/// Main error type for account operations
#[derive(Debug, Error)]
pub enum AccountError {
  #[error("Invalid credentials provided")]
  InvalidCredentials,

  #[error("Email already exists")]
  EmailAlreadyExists,

  #[error("User not found")]
  UserNotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Token error: {0}")]
  Token(#[from] TokenError),

  #[error("Validation error: {0}")]
  Validation(#[from] ValidationError),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Duplicate key violation: {0}")]
  DuplicateKey(String),

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),
}

/// Token signing and decoding errors
#[derive(Debug, Error)]
pub enum TokenError {
  #[error("Failed to sign token: {0}")]
  SigningFailed(String),

  #[error("Token has expired")]
  Expired,

  #[error("Invalid token: {0}")]
  Invalid(String),
}

/// Input validation errors
///
/// The display strings are the messages returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Name, email and password are required")]
  RegistrationFieldsMissing,

  #[error("Email and password are required")]
  LoginFieldsMissing,

  #[error("Password must be at least {min} characters")]
  PasswordTooShort { min: usize },

  #[error("{field} must not be empty")]
  EmptyField { field: &'static str },
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::Database(db_err) => {
        if db_err.is_unique_violation() {
          RepositoryError::DuplicateKey(db_err.message().to_string())
        } else {
          RepositoryError::DatabaseError(db_err.message().to_string())
        }
      }
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AccountError {
  fn from(error: sqlx::Error) -> Self {
    match RepositoryError::from(error) {
      RepositoryError::DuplicateKey(_) => AccountError::EmailAlreadyExists,
      other => AccountError::Repository(other),
    }
  }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
  fn from(error: jsonwebtoken::errors::Error) -> Self {
    use jsonwebtoken::errors::ErrorKind;
    match error.kind() {
      ErrorKind::ExpiredSignature => TokenError::Expired,
      _ => TokenError::Invalid(error.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validation_messages() {
    assert_eq!(
      ValidationError::RegistrationFieldsMissing.to_string(),
      "Name, email and password are required"
    );
    assert_eq!(
      ValidationError::PasswordTooShort { min: 6 }.to_string(),
      "Password must be at least 6 characters"
    );
    assert_eq!(
      ValidationError::EmptyField { field: "name" }.to_string(),
      "name must not be empty"
    );
  }

  #[test]
  fn test_row_not_found_is_query_failure() {
    let error = RepositoryError::from(sqlx::Error::RowNotFound);
    assert!(matches!(error, RepositoryError::QueryFailed(_)));
  }

  #[test]
  fn test_pool_errors_map_to_connection_failures() {
    assert!(matches!(
      RepositoryError::from(sqlx::Error::PoolTimedOut),
      RepositoryError::ConnectionFailed(_)
    ));
    assert!(matches!(
      AccountError::from(sqlx::Error::PoolClosed),
      AccountError::Repository(RepositoryError::ConnectionFailed(_))
    ));
  }
}
