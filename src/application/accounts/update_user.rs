use std::sync::Arc;
use uuid::Uuid;

use crate::domain::accounts::entities::User;
use crate::domain::accounts::errors::AccountError;
use crate::domain::accounts::services::{AccountService, UserUpdate};
use crate::domain::accounts::value_objects::{Email, Password, UserName};

/// Command for a partial user update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
  pub name: Option<String>,
  pub email: Option<String>,
  pub password: Option<String>,
}

/// Use case for updating some fields of a user
pub struct UpdateUserUseCase {
  account_service: Arc<AccountService>,
}

impl UpdateUserUseCase {
  /// Creates a new instance of UpdateUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Applies the supplied fields with the same rules as registration
  ///
  /// # Errors
  /// Returns `AccountError::Validation` for an empty field or short password,
  /// `AccountError::UserNotFound` for an unknown id and
  /// `AccountError::EmailAlreadyExists` if the new email is taken.
  pub async fn execute(
    &self,
    user_id: Uuid,
    command: UpdateUserCommand,
  ) -> Result<User, AccountError> {
    let update = UserUpdate {
      name: command.name.map(UserName::new).transpose()?,
      email: command.email.map(Email::new).transpose()?,
      password: command.password.map(Password::new).transpose()?,
    };

    let user = self.account_service.update_user(user_id, update).await?;
    tracing::info!(user_id = %user.id, "User updated");
    Ok(user)
  }
}
