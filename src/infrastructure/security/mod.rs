mod argon2_hasher;
mod jwt_issuer;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt_issuer::{Claims, JwtTokenIssuer, TOKEN_TTL_DAYS};
