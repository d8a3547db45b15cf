use std::fmt;

use super::errors::ValidationError;

// ============================================================================
// UserName Value Object
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
  /// Creates a new UserName, rejecting empty input
  pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
    let name = name.into();

    if name.is_empty() {
      return Err(ValidationError::EmptyField { field: "name" });
    }

    Ok(Self(name))
  }

  /// Returns the name as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for UserName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// ============================================================================
// Email Value Object
// ============================================================================

/// Email address as submitted by the client.
///
/// Emails are compared exactly as stored, so no case folding happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
  /// Creates a new Email, rejecting empty input
  pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
    let email = email.into();

    if email.is_empty() {
      return Err(ValidationError::EmptyField { field: "email" });
    }

    Ok(Self(email))
  }

  /// Returns the email as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for Email {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl AsRef<str> for Email {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// ============================================================================
// Password Value Object (Plain Password - Never Stored)
// ============================================================================

#[derive(Clone)]
pub struct Password(String);

impl Password {
  pub const MIN_LENGTH: usize = 6;

  /// Creates a new Password for account creation or update.
  ///
  /// Length is counted in characters, not bytes.
  pub fn new(password: impl Into<String>) -> Result<Self, ValidationError> {
    let password = password.into();

    if password.is_empty() {
      return Err(ValidationError::EmptyField { field: "password" });
    }

    if password.chars().count() < Self::MIN_LENGTH {
      return Err(ValidationError::PasswordTooShort {
        min: Self::MIN_LENGTH,
      });
    }

    Ok(Self(password))
  }

  /// Wraps a submitted login password without applying the length policy.
  ///
  /// Accounts created before the policy existed must still be able to log in.
  pub fn for_login(password: impl Into<String>) -> Result<Self, ValidationError> {
    let password = password.into();

    if password.is_empty() {
      return Err(ValidationError::EmptyField { field: "password" });
    }

    Ok(Self(password))
  }

  /// Returns the password as a string slice (use with caution)
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Password {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Password(***)")
  }
}

// ============================================================================
// PasswordHash Value Object (Argon2id PHC string)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
  /// Wraps a hash string produced by a `PasswordHasher` or read from storage
  pub fn from_hash(hash: impl Into<String>) -> Self {
    Self(hash.into())
  }

  /// Returns the hash as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Consumes self and returns the inner String
  pub fn into_inner(self) -> String {
    self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_user_name_rejects_empty() {
    assert!(UserName::new("Ana").is_ok());
    assert_eq!(
      UserName::new(""),
      Err(ValidationError::EmptyField { field: "name" })
    );
  }

  #[test]
  fn test_email_is_kept_as_submitted() {
    let email = Email::new("Ana@Example.com").unwrap();
    assert_eq!(email.as_str(), "Ana@Example.com");
    assert!(Email::new("").is_err());
  }

  #[test]
  fn test_password_minimum_length() {
    assert!(Password::new("123456").is_ok());
    assert!(matches!(
      Password::new("12345"),
      Err(ValidationError::PasswordTooShort { min: 6 })
    ));
    assert!(matches!(
      Password::new(""),
      Err(ValidationError::EmptyField { field: "password" })
    ));
  }

  #[test]
  fn test_password_length_counts_characters() {
    // six characters, twelve bytes
    assert!(Password::new("çççççç").is_ok());
    assert!(Password::new("ééééé").is_err());
  }

  #[test]
  fn test_login_password_skips_length_policy() {
    assert!(Password::for_login("abc").is_ok());
    assert!(Password::for_login("").is_err());
  }

  #[test]
  fn test_password_debug_is_redacted() {
    let password = Password::new("supersecret").unwrap();
    assert_eq!(format!("{:?}", password), "Password(***)");
  }
}
