pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{User, UserChanges};
pub use errors::{AccountError, HashError, RepositoryError, TokenError, ValidationError};
pub use ports::{PasswordHasher, TokenIssuer, UserRepository};
pub use services::{AccountService, UserUpdate};
pub use value_objects::{Email, Password, PasswordHash, UserName};
