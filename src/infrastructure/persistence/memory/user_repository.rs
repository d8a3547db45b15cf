use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::accounts::{
  entities::User, errors::AccountError, ports::UserRepository, value_objects::Email,
};

/// In-process user store for local development and HTTP tests.
///
/// Enforces the same email uniqueness rule as the `users_email_key` index.
/// Data is lost when the process exits.
#[derive(Default)]
pub struct InMemoryUserRepository {
  users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
  /// Creates an empty repository
  pub fn new() -> Self {
    Self::default()
  }
}

fn email_taken(users: &HashMap<Uuid, User>, email: &str, except: Uuid) -> bool {
  users
    .values()
    .any(|existing| existing.id != except && existing.email == email)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
  async fn create(&self, user: User) -> Result<User, AccountError> {
    let mut users = self.users.write().await;

    if email_taken(&users, &user.email, user.id) {
      return Err(AccountError::EmailAlreadyExists);
    }

    users.insert(user.id, user.clone());
    Ok(user)
  }

  async fn find_all(&self) -> Result<Vec<User>, AccountError> {
    let users = self.users.read().await;

    let mut all: Vec<User> = users.values().cloned().collect();
    all.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    Ok(all)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountError> {
    Ok(self.users.read().await.get(&id).cloned())
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AccountError> {
    let users = self.users.read().await;

    Ok(
      users
        .values()
        .find(|user| user.email == email.as_str())
        .cloned(),
    )
  }

  async fn update(&self, user: User) -> Result<Option<User>, AccountError> {
    let mut users = self.users.write().await;

    if !users.contains_key(&user.id) {
      return Ok(None);
    }

    if email_taken(&users, &user.email, user.id) {
      return Err(AccountError::EmailAlreadyExists);
    }

    users.insert(user.id, user.clone());
    Ok(Some(user))
  }

  async fn delete(&self, id: Uuid) -> Result<Option<User>, AccountError> {
    Ok(self.users.write().await.remove(&id))
  }
}
