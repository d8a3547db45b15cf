use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::accounts::errors::{AccountError, TokenError};
use crate::domain::accounts::ports::TokenIssuer;

/// Token lifetime
pub const TOKEN_TTL_DAYS: i64 = 7;

/// JWT payload: the user id as subject and an expiry, nothing else
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub exp: i64,
}

/// HS256 token issuer keyed by the configured signing secret
pub struct JwtTokenIssuer {
  encoding_key: EncodingKey,
  decoding_key: DecodingKey,
  validation: Validation,
}

impl JwtTokenIssuer {
  /// Creates an issuer from the shared signing secret
  pub fn new(secret: &str) -> Self {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_required_spec_claims(&["exp", "sub"]);

    Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
      decoding_key: DecodingKey::from_secret(secret.as_bytes()),
      validation,
    }
  }

  /// Signs a token for `user_id` as if issued at `issued_at`
  pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
    let claims = Claims {
      sub: user_id.to_string(),
      exp: (issued_at + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
    };

    encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
      .map_err(|e| TokenError::SigningFailed(e.to_string()))
  }

  /// Verifies a token and returns its claims
  pub fn claims(&self, token: &str) -> Result<Claims, TokenError> {
    let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
    Ok(data.claims)
  }
}

impl TokenIssuer for JwtTokenIssuer {
  fn issue(&self, user_id: Uuid) -> Result<String, AccountError> {
    Ok(self.issue_at(user_id, Utc::now())?)
  }

  fn decode(&self, token: &str) -> Result<Uuid, AccountError> {
    let claims = self.claims(token)?;
    let user_id = Uuid::parse_str(&claims.sub)
      .map_err(|_| TokenError::Invalid(format!("subject is not a user id: {}", claims.sub)))?;
    Ok(user_id)
  }
}
