use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User entity representing an account in the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// Display name
  pub name: String,
  /// Email address (unique, case-sensitive)
  pub email: String,
  /// Argon2id hash of the password; never leaves the server
  pub password_hash: String,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new user with the given details
  pub fn new(name: String, email: String, password_hash: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      email,
      password_hash,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      email,
      password_hash,
      created_at,
      updated_at,
    }
  }

  /// Applies a partial update. Fields left as `None` keep their value.
  ///
  /// `updated_at` only moves when at least one field was supplied.
  pub fn apply_changes(&mut self, changes: UserChanges) {
    if changes.is_empty() {
      return;
    }

    if let Some(name) = changes.name {
      self.name = name;
    }
    if let Some(email) = changes.email {
      self.email = email;
    }
    if let Some(password_hash) = changes.password_hash {
      self.password_hash = password_hash;
    }

    self.updated_at = Utc::now();
  }
}

/// Already-validated field replacements for a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
  pub name: Option<String>,
  pub email: Option<String>,
  pub password_hash: Option<String>,
}

impl UserChanges {
  /// Returns true when no field would change
  pub fn is_empty(&self) -> bool {
    self.name.is_none() && self.email.is_none() && self.password_hash.is_none()
  }
}
