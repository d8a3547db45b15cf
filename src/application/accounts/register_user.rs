use std::sync::Arc;

use crate::domain::accounts::entities::User;
use crate::domain::accounts::errors::{AccountError, ValidationError};
use crate::domain::accounts::ports::TokenIssuer;
use crate::domain::accounts::services::AccountService;
use crate::domain::accounts::value_objects::{Email, Password, UserName};

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  /// User's display name
  pub name: String,
  /// User's email address
  pub email: String,
  /// User's password (plain text, will be hashed)
  pub password: String,
}

/// Response after successful user registration
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  /// The newly created user
  pub user: User,
  /// Signed identity token for the new user
  pub token: String,
}

/// Use case for registering a new user
pub struct RegisterUserUseCase {
  account_service: Arc<AccountService>,
  token_issuer: Arc<dyn TokenIssuer>,
}

impl RegisterUserUseCase {
  /// Creates a new instance of RegisterUserUseCase
  pub fn new(account_service: Arc<AccountService>, token_issuer: Arc<dyn TokenIssuer>) -> Self {
    Self {
      account_service,
      token_issuer,
    }
  }

  /// Executes the user registration use case
  ///
  /// Checks run in a fixed order: required fields, password length, then
  /// email availability.
  ///
  /// # Errors
  /// Returns `AccountError::Validation` for missing fields or a short password,
  /// `AccountError::EmailAlreadyExists` if the email is taken, and
  /// repository/hash/token errors for unexpected failures.
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, AccountError> {
    if command.name.is_empty() || command.email.is_empty() || command.password.is_empty() {
      return Err(ValidationError::RegistrationFieldsMissing.into());
    }

    let password = Password::new(command.password)?;
    let name = UserName::new(command.name)?;
    let email = Email::new(command.email)?;

    let user = self.account_service.register(name, email, password).await?;
    let token = self.token_issuer.issue(user.id)?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(RegisterUserResponse { user, token })
  }
}
