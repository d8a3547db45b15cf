use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::accounts::errors::{AccountError, HashError};
use crate::domain::accounts::ports::PasswordHasher;
use crate::domain::accounts::value_objects::{Password, PasswordHash};

/// Argon2id password hasher implementation
///
/// Parameters: 19 MiB memory, 2 iterations, 1 lane, 32-byte output.
pub struct Argon2PasswordHasher {
  argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
  const MEMORY_COST_KIB: u32 = 19456;
  const TIME_COST: u32 = 2;
  const PARALLELISM: u32 = 1;
  const OUTPUT_LEN: usize = 32;

  /// Creates a new Argon2PasswordHasher
  pub fn new() -> Result<Self, AccountError> {
    let params = Params::new(
      Self::MEMORY_COST_KIB,
      Self::TIME_COST,
      Self::PARALLELISM,
      Some(Self::OUTPUT_LEN),
    )
    .map_err(|e| {
      AccountError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
  async fn hash(&self, password: &Password) -> Result<PasswordHash, AccountError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_str().as_bytes(), &salt)
      .map_err(|e| AccountError::Hash(HashError::HashingFailed(e.to_string())))?;

    Ok(PasswordHash::from_hash(hash.to_string()))
  }

  /// Returns `Ok(false)` on mismatch; only a corrupt stored hash is an error.
  async fn verify(
    &self,
    password: &Password,
    hashed_password: &PasswordHash,
  ) -> Result<bool, AccountError> {
    let parsed_hash = Argon2PasswordHash::new(hashed_password.as_str()).map_err(|e| {
      AccountError::Hash(HashError::VerificationFailed(format!(
        "Invalid hash format: {}",
        e
      )))
    })?;

    match self
      .argon2
      .verify_password(password.as_str().as_bytes(), &parsed_hash)
    {
      Ok(()) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AccountError::Hash(HashError::VerificationFailed(
        e.to_string(),
      ))),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_hash_password() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    let hash = hasher.hash(&password).await.unwrap();

    assert!(hash.as_str().starts_with("$argon2id$"));
    assert_ne!(hash.as_str(), password.as_str());
  }

  #[tokio::test]
  async fn test_verify_correct_and_incorrect_password() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();
    let wrong_password = Password::new("wrong_password").unwrap();

    let hash = hasher.hash(&password).await.unwrap();

    assert!(hasher.verify(&password, &hash).await.unwrap());
    assert!(!hasher.verify(&wrong_password, &hash).await.unwrap());
  }

  #[tokio::test]
  async fn test_hash_produces_different_salts() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    let hash1 = hasher.hash(&password).await.unwrap();
    let hash2 = hasher.hash(&password).await.unwrap();

    assert_ne!(hash1.as_str(), hash2.as_str());
    assert!(hasher.verify(&password, &hash1).await.unwrap());
    assert!(hasher.verify(&password, &hash2).await.unwrap());
  }

  #[tokio::test]
  async fn test_verify_corrupt_hash_is_an_error() {
    let hasher = Argon2PasswordHasher::new().unwrap();
    let password = Password::new("test_password_123").unwrap();

    let result = hasher
      .verify(&password, &PasswordHash::from_hash("not-a-phc-string"))
      .await;

    assert!(matches!(
      result,
      Err(AccountError::Hash(HashError::VerificationFailed(_)))
    ));
  }
}
