use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateUserRequest, UserEnvelope, UserResponse,
    UsersEnvelope,
  },
  errors::{ApiError, AuthErrorKind},
};
use crate::application::accounts::{
  DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUserCommand, LoginUserUseCase,
  RegisterUserCommand, RegisterUserUseCase, UpdateUserCommand, UpdateUserUseCase,
};

/// Parse the `{id}` path segment. An id that cannot exist is reported as not found.
fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::Auth(AuthErrorKind::UserNotFound))
}

/// Handler for user registration
///
/// POST /api/usuarios/cadastro
/// Body: RegisterRequest (JSON)
/// Response: AuthResponse (JSON) with status 201
pub async fn register_handler(
  request: web::Json<RegisterRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = RegisterUserCommand {
    name: request.name.unwrap_or_default(),
    email: request.email.unwrap_or_default(),
    password: request.password.unwrap_or_default(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Created().json(AuthResponse {
    message: "User created successfully".to_string(),
    user: response.user.into(),
    token: response.token,
  }))
}

/// Handler for user login
///
/// POST /api/usuarios/login
/// Body: LoginRequest (JSON)
/// Response: AuthResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;
  let request = request.into_inner();

  let command = LoginUserCommand {
    email: request.email.unwrap_or_default(),
    password: request.password.unwrap_or_default(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(AuthResponse {
    message: "Login successful".to_string(),
    user: response.user.into(),
    token: response.token,
  }))
}

/// Handler listing every user. Unauthenticated; meant for development.
///
/// GET /api/usuarios
pub async fn list_users_handler(
  use_case: web::Data<Arc<ListUsersUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let users = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(UsersEnvelope {
    users: users.into_iter().map(UserResponse::from).collect(),
  }))
}

/// GET /api/usuarios/{id}
pub async fn get_user_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<GetUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user_id = parse_user_id(&path)?;
  let user = use_case.execute(user_id).await?;

  Ok(HttpResponse::Ok().json(UserEnvelope { user: user.into() }))
}

/// PUT /api/usuarios/{id}
///
/// Body: UpdateUserRequest (JSON), any subset of name, email and password
pub async fn update_user_handler(
  path: web::Path<String>,
  request: web::Json<UpdateUserRequest>,
  use_case: web::Data<Arc<UpdateUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user_id = parse_user_id(&path)?;
  request.validate()?;
  let request = request.into_inner();

  let command = UpdateUserCommand {
    name: request.name,
    email: request.email,
    password: request.password,
  };

  let user = use_case.execute(user_id, command).await?;

  Ok(HttpResponse::Ok().json(UserEnvelope { user: user.into() }))
}

/// DELETE /api/usuarios/{id}
///
/// Responds with the removed user
pub async fn delete_user_handler(
  path: web::Path<String>,
  use_case: web::Data<Arc<DeleteUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user_id = parse_user_id(&path)?;
  let user = use_case.execute(user_id).await?;

  Ok(HttpResponse::Ok().json(UserEnvelope { user: user.into() }))
}
