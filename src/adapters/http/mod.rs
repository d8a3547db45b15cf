pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{
  AuthResponse, ErrorResponse, HealthResponse, LoginRequest, RegisterRequest, UpdateUserRequest,
  UserEnvelope, UserResponse, UsersEnvelope,
};
pub use errors::{ApiError, AuthErrorKind};
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware};
pub use routes::{AccountRouteDependencies, configure_account_routes, configure_api};
