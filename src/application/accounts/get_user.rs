use std::sync::Arc;
use uuid::Uuid;

use crate::domain::accounts::entities::User;
use crate::domain::accounts::errors::AccountError;
use crate::domain::accounts::services::AccountService;

/// Use case for fetching a single user by id
pub struct GetUserUseCase {
  account_service: Arc<AccountService>,
}

impl GetUserUseCase {
  /// Creates a new instance of GetUserUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// # Errors
  /// Returns `AccountError::UserNotFound` if no user has this id
  pub async fn execute(&self, user_id: Uuid) -> Result<User, AccountError> {
    self.account_service.get_user(user_id).await
  }
}
