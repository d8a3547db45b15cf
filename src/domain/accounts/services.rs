use std::sync::Arc;
use uuid::Uuid;

use super::entities::{User, UserChanges};
use super::errors::AccountError;
use super::ports::{PasswordHasher, UserRepository};
use super::value_objects::{Email, Password, PasswordHash, UserName};

/// Validated partial update requested by a client
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
  pub name: Option<UserName>,
  pub email: Option<Email>,
  pub password: Option<Password>,
}

/// Account service: the account store seen by the application layer.
///
/// Combines user persistence with password hashing so callers never handle
/// password hashes directly.
pub struct AccountService {
  user_repo: Arc<dyn UserRepository>,
  password_hasher: Arc<dyn PasswordHasher>,
}

impl AccountService {
  /// Creates a new instance of AccountService
  pub fn new(user_repo: Arc<dyn UserRepository>, password_hasher: Arc<dyn PasswordHasher>) -> Self {
    Self {
      user_repo,
      password_hasher,
    }
  }

  /// Registers a new user
  ///
  /// # Errors
  /// Returns `AccountError::EmailAlreadyExists` if the email is already registered,
  /// either found up front or reported by the repository's unique constraint.
  pub async fn register(
    &self,
    name: UserName,
    email: Email,
    password: Password,
  ) -> Result<User, AccountError> {
    if self.user_repo.find_by_email(&email).await?.is_some() {
      tracing::warn!("Registration rejected: email already in use");
      return Err(AccountError::EmailAlreadyExists);
    }

    let password_hash = self.password_hasher.hash(&password).await?;

    let user = User::new(
      name.into_inner(),
      email.into_inner(),
      password_hash.into_inner(),
    );

    self.user_repo.create(user).await
  }

  /// Returns the user owning `email` if `password` matches the stored hash.
  ///
  /// An unknown email and a wrong password both yield `Ok(None)`.
  pub async fn authenticate(
    &self,
    email: &Email,
    password: &Password,
  ) -> Result<Option<User>, AccountError> {
    let Some(user) = self.user_repo.find_by_email(email).await? else {
      return Ok(None);
    };

    let stored_hash = PasswordHash::from_hash(user.password_hash.clone());
    if self.password_hasher.verify(password, &stored_hash).await? {
      Ok(Some(user))
    } else {
      Ok(None)
    }
  }

  /// Lists every user
  pub async fn list_users(&self) -> Result<Vec<User>, AccountError> {
    self.user_repo.find_all().await
  }

  /// Fetches a single user
  ///
  /// # Errors
  /// Returns `AccountError::UserNotFound` if no user has this id
  pub async fn get_user(&self, id: Uuid) -> Result<User, AccountError> {
    self
      .user_repo
      .find_by_id(id)
      .await?
      .ok_or(AccountError::UserNotFound)
  }

  /// Replaces the supplied fields of a user, re-hashing a new password
  ///
  /// # Errors
  /// Returns `AccountError::UserNotFound` if no user has this id and
  /// `AccountError::EmailAlreadyExists` if the new email belongs to someone else
  pub async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User, AccountError> {
    let mut user = self.get_user(id).await?;

    let password_hash = match &update.password {
      Some(password) => Some(self.password_hasher.hash(password).await?.into_inner()),
      None => None,
    };

    let changes = UserChanges {
      name: update.name.map(UserName::into_inner),
      email: update.email.map(Email::into_inner),
      password_hash,
    };

    if changes.is_empty() {
      return Ok(user);
    }

    user.apply_changes(changes);

    self
      .user_repo
      .update(user)
      .await?
      .ok_or(AccountError::UserNotFound)
  }

  /// Deletes a user and returns the removed record
  ///
  /// # Errors
  /// Returns `AccountError::UserNotFound` if no user has this id
  pub async fn delete_user(&self, id: Uuid) -> Result<User, AccountError> {
    self
      .user_repo
      .delete(id)
      .await?
      .ok_or(AccountError::UserNotFound)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::Argon2PasswordHasher;

  fn service() -> AccountService {
    AccountService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::new().unwrap()),
    )
  }

  async fn register(service: &AccountService, email: &str, password: &str) -> User {
    service
      .register(
        UserName::new("Test User").unwrap(),
        Email::new(email).unwrap(),
        Password::new(password).unwrap(),
      )
      .await
      .unwrap()
  }

  #[tokio::test]
  async fn test_register_hashes_password() {
    let service = service();
    let user = register(&service, "ana@example.com", "secret123").await;

    assert_ne!(user.password_hash, "secret123");
    assert!(user.password_hash.starts_with("$argon2id$"));
  }

  #[tokio::test]
  async fn test_register_rejects_duplicate_email() {
    let service = service();
    register(&service, "ana@example.com", "secret123").await;

    let result = service
      .register(
        UserName::new("Someone Else").unwrap(),
        Email::new("ana@example.com").unwrap(),
        Password::new("different").unwrap(),
      )
      .await;

    assert!(matches!(result, Err(AccountError::EmailAlreadyExists)));
  }

  #[tokio::test]
  async fn test_authenticate() {
    let service = service();
    let user = register(&service, "ana@example.com", "secret123").await;
    let email = Email::new("ana@example.com").unwrap();

    let found = service
      .authenticate(&email, &Password::for_login("secret123").unwrap())
      .await
      .unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let wrong = service
      .authenticate(&email, &Password::for_login("wrong-password").unwrap())
      .await
      .unwrap();
    assert!(wrong.is_none());

    let unknown = service
      .authenticate(
        &Email::new("nobody@example.com").unwrap(),
        &Password::for_login("secret123").unwrap(),
      )
      .await
      .unwrap();
    assert!(unknown.is_none());
  }

  #[tokio::test]
  async fn test_update_user_partial() {
    let service = service();
    let user = register(&service, "ana@example.com", "secret123").await;

    let updated = service
      .update_user(
        user.id,
        UserUpdate {
          name: Some(UserName::new("Ana Maria").unwrap()),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);
  }

  #[tokio::test]
  async fn test_update_user_password_is_rehashed() {
    let service = service();
    let user = register(&service, "ana@example.com", "secret123").await;

    service
      .update_user(
        user.id,
        UserUpdate {
          password: Some(Password::new("another-secret").unwrap()),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    let email = Email::new("ana@example.com").unwrap();
    let old = service
      .authenticate(&email, &Password::for_login("secret123").unwrap())
      .await
      .unwrap();
    let new = service
      .authenticate(&email, &Password::for_login("another-secret").unwrap())
      .await
      .unwrap();

    assert!(old.is_none());
    assert!(new.is_some());
  }

  #[tokio::test]
  async fn test_update_user_to_taken_email() {
    let service = service();
    register(&service, "ana@example.com", "secret123").await;
    let bob = register(&service, "bob@example.com", "secret123").await;

    let result = service
      .update_user(
        bob.id,
        UserUpdate {
          email: Some(Email::new("ana@example.com").unwrap()),
          ..Default::default()
        },
      )
      .await;

    assert!(matches!(result, Err(AccountError::EmailAlreadyExists)));
  }

  #[tokio::test]
  async fn test_missing_user() {
    let service = service();
    let id = Uuid::new_v4();

    assert!(matches!(
      service.get_user(id).await,
      Err(AccountError::UserNotFound)
    ));
    assert!(matches!(
      service.update_user(id, UserUpdate::default()).await,
      Err(AccountError::UserNotFound)
    ));
    assert!(matches!(
      service.delete_user(id).await,
      Err(AccountError::UserNotFound)
    ));
  }

  #[tokio::test]
  async fn test_delete_user() {
    let service = service();
    let user = register(&service, "ana@example.com", "secret123").await;

    let removed = service.delete_user(user.id).await.unwrap();
    assert_eq!(removed.id, user.id);
    assert!(matches!(
      service.get_user(user.id).await,
      Err(AccountError::UserNotFound)
    ));
    assert!(service.list_users().await.unwrap().is_empty());
  }
}
