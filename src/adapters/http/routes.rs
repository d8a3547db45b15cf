use actix_web::web;
use std::sync::Arc;

use crate::application::accounts::{
  DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUserUseCase, RegisterUserUseCase,
  UpdateUserUseCase,
};
use crate::domain::accounts::ports::TokenIssuer;
use crate::domain::accounts::services::AccountService;

use super::errors::ApiError;
use super::handlers::accounts::{
  delete_user_handler, get_user_handler, list_users_handler, login_handler, register_handler,
  update_user_handler,
};
use super::handlers::health::health_handler;

/// Use cases backing the account routes
#[derive(Clone)]
pub struct AccountRouteDependencies {
  pub register_use_case: Arc<RegisterUserUseCase>,
  pub login_use_case: Arc<LoginUserUseCase>,
  pub list_users_use_case: Arc<ListUsersUseCase>,
  pub get_user_use_case: Arc<GetUserUseCase>,
  pub update_user_use_case: Arc<UpdateUserUseCase>,
  pub delete_user_use_case: Arc<DeleteUserUseCase>,
}

impl AccountRouteDependencies {
  /// Wires every account use case on top of one service and token issuer
  pub fn new(account_service: Arc<AccountService>, token_issuer: Arc<dyn TokenIssuer>) -> Self {
    Self {
      register_use_case: Arc::new(RegisterUserUseCase::new(
        account_service.clone(),
        token_issuer.clone(),
      )),
      login_use_case: Arc::new(LoginUserUseCase::new(account_service.clone(), token_issuer)),
      list_users_use_case: Arc::new(ListUsersUseCase::new(account_service.clone())),
      get_user_use_case: Arc::new(GetUserUseCase::new(account_service.clone())),
      update_user_use_case: Arc::new(UpdateUserUseCase::new(account_service.clone())),
      delete_user_use_case: Arc::new(DeleteUserUseCase::new(account_service)),
    }
  }
}

/// Configure account routes
///
/// Mounts the account endpoints under the provided scope (e.g. /api/usuarios).
///
/// # Routes
///
/// - GET / - List all users (with or without the trailing slash)
/// - POST /cadastro - Register a new user and issue a token
/// - POST /login - Authenticate and issue a token
/// - GET /{id} - Fetch one user
/// - PUT /{id} - Partially update a user
/// - DELETE /{id} - Delete a user
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// # use movieapp::adapters::http::routes::{AccountRouteDependencies, configure_account_routes};
///
/// # fn example(deps: AccountRouteDependencies) {
/// let app = App::new().service(
///   web::scope("/api/usuarios").configure(|cfg| configure_account_routes(cfg, deps)),
/// );
/// # }
/// ```
pub fn configure_account_routes(cfg: &mut web::ServiceConfig, deps: AccountRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.register_use_case))
    .app_data(web::Data::new(deps.login_use_case))
    .app_data(web::Data::new(deps.list_users_use_case))
    .app_data(web::Data::new(deps.get_user_use_case))
    .app_data(web::Data::new(deps.update_user_use_case))
    .app_data(web::Data::new(deps.delete_user_use_case))
    .route("", web::get().to(list_users_handler))
    .route("/", web::get().to(list_users_handler))
    .route("/cadastro", web::post().to(register_handler))
    .route("/login", web::post().to(login_handler))
    .route("/{id}", web::get().to(get_user_handler))
    .route("/{id}", web::put().to(update_user_handler))
    .route("/{id}", web::delete().to(delete_user_handler));
}

/// Configure the whole JSON API
///
/// Body extraction failures are answered with the same `{"error": ...}` shape
/// as every other error.
pub fn configure_api(cfg: &mut web::ServiceConfig, deps: AccountRouteDependencies) {
  cfg
    .app_data(
      web::JsonConfig::default().error_handler(|err, _req| ApiError::from(err).into()),
    )
    .route("/api/health", web::get().to(health_handler))
    .service(web::scope("/api/usuarios").configure(|cfg| configure_account_routes(cfg, deps)));
}
