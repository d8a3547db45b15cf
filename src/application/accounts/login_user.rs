use std::sync::Arc;

use crate::domain::accounts::entities::User;
use crate::domain::accounts::errors::{AccountError, ValidationError};
use crate::domain::accounts::ports::TokenIssuer;
use crate::domain::accounts::services::AccountService;
use crate::domain::accounts::value_objects::{Email, Password};

/// Command for logging in a user
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  /// User's email address
  pub email: String,
  /// User's password (plain text)
  pub password: String,
}

/// Response after successful user login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  /// The authenticated user
  pub user: User,
  /// Signed identity token
  pub token: String,
}

/// Use case for logging in a user
pub struct LoginUserUseCase {
  account_service: Arc<AccountService>,
  token_issuer: Arc<dyn TokenIssuer>,
}

impl LoginUserUseCase {
  /// Creates a new instance of LoginUserUseCase
  pub fn new(account_service: Arc<AccountService>, token_issuer: Arc<dyn TokenIssuer>) -> Self {
    Self {
      account_service,
      token_issuer,
    }
  }

  /// Executes the user login use case
  ///
  /// # Errors
  /// Returns `AccountError::InvalidCredentials` for an unknown email and for a
  /// wrong password alike, so callers cannot tell which one happened.
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AccountError> {
    if command.email.is_empty() || command.password.is_empty() {
      return Err(ValidationError::LoginFieldsMissing.into());
    }

    let email = Email::new(command.email)?;
    let password = Password::for_login(command.password)?;

    let Some(user) = self.account_service.authenticate(&email, &password).await? else {
      tracing::warn!("Failed login attempt");
      return Err(AccountError::InvalidCredentials);
    };

    let token = self.token_issuer.issue(user.id)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(LoginUserResponse { user, token })
  }
}
