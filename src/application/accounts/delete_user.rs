use std::sync::Arc;
use uuid::Uuid;

use crate::domain::accounts::entities::User;
use crate::domain::accounts::errors::AccountError;
use crate::domain::accounts::services::AccountService;

/// Use case for permanently removing a user
pub struct DeleteUserUseCase {
  account_service: Arc<AccountService>,
}

impl DeleteUserUseCase {
  /// Creates a new instance of DeleteUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Deletes the user and returns the removed record
  ///
  /// # Errors
  /// Returns `AccountError::UserNotFound` if no user has this id
  pub async fn execute(&self, user_id: Uuid) -> Result<User, AccountError> {
    let user = self.account_service.delete_user(user_id).await?;
    tracing::info!(user_id = %user.id, "User deleted");
    Ok(user)
  }
}
