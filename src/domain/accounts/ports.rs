use async_trait::async_trait;
use uuid::Uuid;

use super::entities::User;
use super::errors::AccountError;
use super::value_objects::{Email, Password, PasswordHash};

/// Repository trait for user persistence operations
///
/// Implementations must enforce email uniqueness and report a violation as
/// `AccountError::EmailAlreadyExists`.
#[async_trait]
pub trait UserRepository: Send + Sync {
  /// Creates a new user in the repository
  async fn create(&self, user: User) -> Result<User, AccountError>;

  /// Returns every stored user, oldest first
  async fn find_all(&self) -> Result<Vec<User>, AccountError>;

  /// Finds a user by their unique identifier
  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountError>;

  /// Finds a user by their exact email address
  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError>;

  /// Replaces a stored user. Returns `None` if the user no longer exists.
  async fn update(&self, user: User) -> Result<Option<User>, AccountError>;

  /// Removes a user permanently, returning the removed record if it existed
  async fn delete(&self, id: Uuid) -> Result<Option<User>, AccountError>;
}

/// Service trait for password hashing operations
#[async_trait]
pub trait PasswordHasher: Send + Sync {
  /// Hashes a plain text password
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError>;

  /// Verifies a plain text password against a hashed password
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError>;
}

/// Issues and decodes signed identity tokens
pub trait TokenIssuer: Send + Sync {
  /// Signs a token whose subject is the given user id
  fn issue(&self, user_id: Uuid) -> Result<String, AccountError>;

  /// Verifies signature and expiry and returns the subject user id
  fn decode(&self, token: &str) -> Result<Uuid, AccountError>;
}
