//! Account use cases
//!
//! Registration and login issue identity tokens; the remaining use cases are
//! plain user management passthroughs.

mod delete_user;
mod get_user;
mod list_users;
mod login_user;
mod register_user;
mod update_user;

pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use login_user::{LoginUserCommand, LoginUserResponse, LoginUserUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserResponse, RegisterUserUseCase};
pub use update_user::{UpdateUserCommand, UpdateUserUseCase};

#[cfg(test)]
pub(crate) mod test_support {
  use std::sync::Arc;

  use crate::domain::accounts::services::AccountService;
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenIssuer};

  pub const TEST_SECRET: &str = "test-signing-secret";

  pub fn account_service() -> Arc<AccountService> {
    Arc::new(AccountService::new(
      Arc::new(InMemoryUserRepository::new()),
      Arc::new(Argon2PasswordHasher::new().unwrap()),
    ))
  }

  pub fn token_issuer() -> Arc<JwtTokenIssuer> {
    Arc::new(JwtTokenIssuer::new(TEST_SECRET))
  }
}
