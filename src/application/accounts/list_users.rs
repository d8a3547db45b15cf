use std::sync::Arc;

use crate::domain::accounts::entities::User;
use crate::domain::accounts::errors::AccountError;
use crate::domain::accounts::services::AccountService;

/// Use case for listing every user (development tooling, unauthenticated)
pub struct ListUsersUseCase {
  account_service: Arc<AccountService>,
}

impl ListUsersUseCase {
  /// Creates a new instance of ListUsersUseCase
  pub fn new(account_service: Arc<AccountService>) -> Self {
    Self { account_service }
  }

  /// Returns all users, oldest first
  pub async fn execute(&self) -> Result<Vec<User>, AccountError> {
    self.account_service.list_users().await
  }
}
